//! One-shot generation: read input, run the pipeline once, print the result.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::GenerationArgs;
use crate::completion::ChatCompletionClient;
use crate::config::{ConfigManager, ResolvedConfig, resolve_config};
use crate::error::EsqlError;
use crate::input::InputReader;
use crate::pipeline::{GeneratedOutput, generate};
use crate::session::SessionContext;
use crate::status;
use crate::ui::{Spinner, Style};

pub struct GenerateOptions {
    pub file: Option<PathBuf>,
    pub generation: GenerationArgs,
    pub write: Option<PathBuf>,
}

/// Loads the config file and resolves settings for this run.
///
/// Runs before any input is read so a missing credential stops the
/// program up front.
pub fn resolve_startup(generation: &GenerationArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new().map_err(|e| EsqlError::Configuration(format!("{e:#}")))?;
    let config_file = manager.load_optional()?;
    let resolved = resolve_config(&generation.resolve_options(), &config_file)?;

    tracing::debug!(
        provider = %resolved.provider_name,
        model = %resolved.model,
        endpoint = %resolved.endpoint,
        has_api_key = resolved.api_key.is_some(),
        "configuration resolved"
    );

    Ok(resolved)
}

/// Builds a completion client whose progress updates the spinner.
pub fn build_client(resolved: &ResolvedConfig, spinner: &Spinner) -> Result<ChatCompletionClient> {
    let progress = spinner.clone();
    Ok(
        ChatCompletionClient::new(resolved.client_settings())?.with_progress(move |chars| {
            progress.set_message(format!("Generating... ({chars} chars received)"));
        }),
    )
}

pub async fn run_generate(options: GenerateOptions) -> Result<()> {
    let resolved = resolve_startup(&options.generation)?;

    let source_text = InputReader::read(options.file.as_deref())?;
    let context = SessionContext::new(resolved.operation, resolved.dialect)
        .with_source_text(source_text);

    let spinner = Spinner::new("Generating...");
    let client = build_client(&resolved, &spinner)?;
    let result = generate(&context, &client).await;
    spinner.stop();

    let output = result?;
    print_output(&output, &context);

    if let Some(dir) = options.write {
        let path = output.save_to(&dir)?;
        status!("{} Saved {}", Style::success("✓"), path.display());
    }

    Ok(())
}

fn print_output(output: &GeneratedOutput, context: &SessionContext) {
    let target = context
        .effective_dialect()
        .map(|db| format!(" for {db}"))
        .unwrap_or_default();

    status!(
        "{} {}",
        Style::header(format!("Generated Output: {}{target}", context.operation)),
        Style::secondary(format!("[{}]", output.language))
    );
    println!("{}", output.text);
}
