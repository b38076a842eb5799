use anyhow::Result;
use inquire::{Editor, Select, Text};
use std::path::{Path, PathBuf};

use super::action::{FormAction, menu};
use super::ui;
use crate::completion::Completer;
use crate::config::ResolvedConfig;
use crate::error::EsqlError;
use crate::input::InputReader;
use crate::operation::{Operation, TargetDialect};
use crate::pipeline::{GeneratedOutput, generate};
use crate::session::SessionContext;
use crate::ui::{Spinner, Style, optional_prompt};

/// State of one interactive form session.
///
/// Output from the last successful generation stays available for saving
/// until any input changes.
pub struct FormSession<C> {
    context: SessionContext,
    config: ResolvedConfig,
    completer: C,
    last_output: Option<GeneratedOutput>,
}

impl<C: Completer> FormSession<C> {
    pub fn new(config: ResolvedConfig, completer: C) -> Self {
        Self {
            context: SessionContext::new(config.operation, config.dialect),
            config,
            completer,
            last_output: None,
        }
    }

    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    pub const fn last_output(&self) -> Option<&GeneratedOutput> {
        self.last_output.as_ref()
    }

    pub fn change_operation(&mut self, operation: Operation) {
        if operation != self.context.operation {
            self.last_output = None;
        }
        self.context = std::mem::take(&mut self.context).on_operation_change(operation);
    }

    pub fn change_dialect(&mut self, dialect: TargetDialect) {
        self.last_output = None;
        self.context = std::mem::take(&mut self.context).with_dialect(dialect);
    }

    pub fn set_source_text(&mut self, text: String) {
        self.last_output = None;
        self.context = std::mem::take(&mut self.context).with_source_text(text);
    }

    /// Replaces the source text with the contents of a `.java` or `.sql` file.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = InputReader::read_file(path)?;
        self.set_source_text(text);
        Ok(())
    }

    /// Runs the pipeline once for the current inputs.
    pub async fn generate_once(&mut self) -> Result<&GeneratedOutput, EsqlError> {
        self.last_output = None;
        let output = generate(&self.context, &self.completer).await?;
        Ok(self.last_output.insert(output))
    }

    /// Saves the last output as `output.<ext>` in `dir`.
    pub fn save_output(&self, dir: &Path) -> Result<PathBuf> {
        let Some(output) = &self.last_output else {
            return Err(EsqlError::Validation("Nothing to save yet. Generate first.".into()).into());
        };
        output.save_to(dir)
    }

    /// Runs the menu loop until the user quits or cancels.
    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        ui::print_state(&self.context);

        loop {
            let actions = menu(self.context.operation.needs_dialect(), self.last_output.is_some());
            let Some(action) = optional_prompt(Select::new("What next?", actions).prompt())? else {
                break;
            };
            if !self.handle_action(action).await? {
                break;
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` once the user asks to quit. Cancelling a sub-prompt
    /// returns to the menu.
    async fn handle_action(&mut self, action: FormAction) -> Result<bool> {
        match action {
            FormAction::Generate => self.run_generate().await?,
            FormAction::ChangeOperation => {
                let current = Operation::ALL
                    .iter()
                    .position(|op| *op == self.context.operation)
                    .unwrap_or(0);
                let Some(operation) = optional_prompt(
                    Select::new("Operation:", Operation::ALL.to_vec())
                        .with_starting_cursor(current)
                        .prompt(),
                )?
                else {
                    return Ok(true);
                };
                let had_text = self.context.has_source_text();
                self.change_operation(operation);
                if had_text && !self.context.has_source_text() {
                    println!("{}", Style::hint("Input cleared for the new operation."));
                }
                ui::print_state(&self.context);
            }
            FormAction::ChangeDialect => {
                let current = TargetDialect::ALL
                    .iter()
                    .position(|db| *db == self.context.dialect)
                    .unwrap_or(0);
                let Some(dialect) = optional_prompt(
                    Select::new("Target database:", TargetDialect::ALL.to_vec())
                        .with_starting_cursor(current)
                        .prompt(),
                )?
                else {
                    return Ok(true);
                };
                self.change_dialect(dialect);
                ui::print_state(&self.context);
            }
            FormAction::EditInput => {
                let extension = if self.context.operation == Operation::EntityToSql {
                    ".java"
                } else {
                    ".sql"
                };
                let Some(text) = optional_prompt(
                    Editor::new("Source text:")
                        .with_predefined_text(&self.context.source_text)
                        .with_file_extension(extension)
                        .with_help_message("Opens $VISUAL / $EDITOR")
                        .prompt(),
                )?
                else {
                    return Ok(true);
                };
                self.set_source_text(text);
                ui::print_state(&self.context);
            }
            FormAction::LoadFile => {
                let Some(path) = optional_prompt(
                    Text::new("File path:")
                        .with_help_message("A .java or .sql file")
                        .prompt(),
                )?
                else {
                    return Ok(true);
                };
                match self.load_file(Path::new(path.trim())) {
                    Ok(()) => ui::print_state(&self.context),
                    Err(e) => ui::print_error(&format!("{e:#}")),
                }
            }
            FormAction::SaveOutput => {
                let Some(dir) =
                    optional_prompt(Text::new("Save to directory:").with_default(".").prompt())?
                else {
                    return Ok(true);
                };
                match self.save_output(Path::new(dir.trim())) {
                    Ok(path) => println!("{} Saved {}\n", Style::success("✓"), path.display()),
                    Err(e) => ui::print_error(&format!("{e:#}")),
                }
            }
            FormAction::ShowConfig => ui::print_config(&self.config, &self.context),
            FormAction::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn run_generate(&mut self) -> Result<()> {
        if !self.context.has_source_text() {
            ui::print_warning("Please paste content to generate output.");
            return Ok(());
        }

        let spinner = Spinner::new("Generating...");
        let result = self.generate_once().await;
        spinner.stop();

        match result {
            Ok(output) => ui::print_output(output),
            Err(EsqlError::Generation(failure)) => {
                ui::print_error(&format!("{failure}"));
                println!("{}", Style::hint("Choose Generate to try again."));
            }
            Err(EsqlError::Validation(message)) => ui::print_warning(&message),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
