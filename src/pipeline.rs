//! Select, build, complete, normalize.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::completion::Completer;
use crate::error::EsqlError;
use crate::fs::atomic_write;
use crate::normalize::normalize;
use crate::operation::OutputLanguage;
use crate::prompt::{PromptValues, build, select};
use crate::session::SessionContext;

/// MIME type of the downloadable output file.
pub const OUTPUT_MIME_TYPE: &str = "text/plain";

/// Normalized model output ready for display or saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub text: String,
    pub language: OutputLanguage,
}

impl GeneratedOutput {
    pub fn file_name(&self) -> String {
        self.language.file_name()
    }

    /// Writes the output as `output.<ext>` inside `dir`.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        atomic_write(&path, &self.text)?;
        Ok(path)
    }
}

/// Builds the prompt for the current session inputs.
///
/// Blank source text is rejected here so no request is ever made for it.
pub fn build_prompt(context: &SessionContext) -> Result<String, EsqlError> {
    if !context.has_source_text() {
        return Err(EsqlError::Validation(
            "Please provide content to generate output.".to_string(),
        ));
    }

    let template = select(context.operation);
    let values = PromptValues::new(context.source_text.trim(), context.effective_dialect());

    Ok(build(template, &values)?)
}

/// Runs one generation for the session inputs.
pub async fn generate<C>(context: &SessionContext, completer: &C) -> Result<GeneratedOutput, EsqlError>
where
    C: Completer + ?Sized,
{
    let prompt = build_prompt(context)?;

    tracing::debug!(
        operation = context.operation.cli_value(),
        prompt_len = prompt.len(),
        "prompt built"
    );

    let raw = completer.complete(&prompt).await.into_result()?;
    let text = normalize(&raw);

    if text.len() != raw.len() {
        tracing::debug!(raw_len = raw.len(), text_len = text.len(), "stripped code fence");
    }

    Ok(GeneratedOutput {
        text,
        language: context.operation.output_language(),
    })
}
