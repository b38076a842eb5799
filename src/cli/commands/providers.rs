//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, ProviderConfig};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// With `specific_provider`, shows details for that provider only. The
/// built-in provider is listed unless the config file overrides it.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_optional()?;
    let default_provider = config
        .esql
        .provider
        .as_deref()
        .unwrap_or(DEFAULT_PROVIDER);

    if let Some(name) = specific_provider {
        let Some(provider) = config.provider(name) else {
            bail!("Provider '{name}' not found");
        };
        print_provider_details(name, &provider, default_provider == name);
        return Ok(());
    }

    println!("{}\n", Style::header("Providers"));
    for name in config.provider_names() {
        if let Some(provider) = config.provider(&name) {
            print_provider_summary(&name, &provider, default_provider == name, &config);
        }
    }

    Ok(())
}

fn print_provider_details(name: &str, provider: &ProviderConfig, is_default: bool) {
    println!(
        "Provider: {}{}",
        Style::value(name),
        if is_default {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    );
    println!("  endpoint = {}", Style::secondary(&provider.endpoint));
    if provider.requires_api_key() {
        let state = if provider.get_api_key().is_some() {
            "(set)"
        } else {
            "(not set)"
        };
        let source = provider
            .api_key_env
            .as_deref()
            .map(|env| format!(" via {env}"))
            .unwrap_or_default();
        println!("  api_key  = {state}{source}");
    }
    if provider.models.is_empty() {
        println!("  models   = (none configured)");
    } else {
        println!("  models:");
        for model in &provider.models {
            println!("    - {model}");
        }
    }
}

fn print_provider_summary(
    name: &str,
    provider: &ProviderConfig,
    is_default: bool,
    config: &ConfigFile,
) {
    let builtin = if config.providers.contains_key(name) {
        ""
    } else {
        " (built-in)"
    };
    println!(
        "  {}{}{}",
        Style::value(name),
        Style::secondary(builtin),
        if is_default {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    );
    println!("    endpoint: {}", Style::secondary(&provider.endpoint));
    if !provider.models.is_empty() {
        println!("    models: {}", provider.models.join(", "));
    }
}
