//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};
use std::fmt::Display;

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, EsqlConfig};
use crate::operation::{Operation, TargetDialect};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current defaults. Otherwise lets the user pick
/// the default provider, model, operation and target database.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_optional()?;

    if show {
        println!(
            "{} {}\n",
            Style::label("config file"),
            Style::secondary(manager.config_path().display())
        );
        print_current_defaults(&config);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager, config))
}

fn run_configure_inner(manager: &ConfigManager, mut config: ConfigFile) -> Result<()> {
    print_current_defaults(&config);

    let provider_names = config.provider_names();
    let provider = select_provider(
        &provider_names,
        config.esql.provider.as_deref().or(Some(DEFAULT_PROVIDER)),
    )?;

    let available_models = config
        .provider(&provider)
        .map(|p| p.models.clone())
        .unwrap_or_default();
    let model = select_model(&available_models, config.esql.model.as_deref())?;

    let operation = select_from(
        "Default operation:",
        &Operation::ALL,
        config.esql.operation.unwrap_or_default(),
    )?;
    let db = select_from(
        "Default target database:",
        &TargetDialect::ALL,
        config.esql.db.unwrap_or_default(),
    )?;

    config.esql = EsqlConfig {
        provider: Some(provider),
        model: Some(model),
        operation: Some(operation),
        db: Some(db),
        ..config.esql
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn or_not_set<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| Style::secondary("(not set)"), Style::value)
}

fn print_current_defaults(config: &ConfigFile) {
    let esql = &config.esql;
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}     {}",
        Style::label("provider"),
        or_not_set(esql.provider.as_deref())
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        or_not_set(esql.model.as_deref())
    );
    println!(
        "  {}    {}",
        Style::label("operation"),
        or_not_set(esql.operation.map(Operation::cli_value))
    );
    println!(
        "  {}           {}",
        Style::label("db"),
        or_not_set(esql.db.map(TargetDialect::cli_value))
    );
    println!(
        "  {}  {}",
        Style::label("temperature"),
        or_not_set(esql.temperature)
    );
    println!(
        "  {} {}",
        Style::label("timeout_secs"),
        or_not_set(esql.timeout_secs)
    );
    println!();
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}

fn select_from<T>(message: &str, options: &[T], current: T) -> Result<T>
where
    T: Copy + PartialEq + Display,
{
    let default_index = options.iter().position(|o| *o == current).unwrap_or(0);

    let selection = Select::new(message, options.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}
