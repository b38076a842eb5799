use std::borrow::Cow;
use std::time::Duration;

use super::manager::{ConfigFile, ProviderConfig};
use crate::completion::{ClientSettings, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS};
use crate::error::EsqlError;
use crate::operation::{Operation, TargetDialect};

/// Provider used when neither the CLI nor the config file names one.
pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const GEMINI_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Returns the built-in provider with the given name, if any.
pub fn builtin_provider(name: &str) -> Option<ProviderConfig> {
    (name == DEFAULT_PROVIDER).then(|| ProviderConfig {
        endpoint: GEMINI_ENDPOINT.to_string(),
        api_key: None,
        api_key_env: Some(GEMINI_API_KEY_ENV.to_string()),
        models: vec![DEFAULT_MODEL.to_string()],
    })
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in ones.
    pub fn provider(&self, name: &str) -> Option<Cow<'_, ProviderConfig>> {
        self.providers
            .get(name)
            .map(Cow::Borrowed)
            .or_else(|| builtin_provider(name).map(Cow::Owned))
    }

    /// All provider names, configured and built-in, sorted.
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        if !self.providers.contains_key(DEFAULT_PROVIDER) {
            names.push(DEFAULT_PROVIDER.to_string());
        }
        names.sort();
        names
    }
}

/// CLI overrides; these take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub operation: Option<Operation>,
    pub db: Option<TargetDialect>,
}

/// Settings for one run after merging CLI, config file and built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider_name: String,
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout: Duration,
    pub operation: Operation,
    pub dialect: TargetDialect,
}

impl ResolvedConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: self.timeout,
        }
    }
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Fails when the provider is unknown, no model can be determined, the
/// temperature is out of range, or the provider needs an API key that is
/// not available.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, EsqlError> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.esql.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        EsqlError::Configuration(format!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/esql/config.toml",
            config_file.provider_names().join("\n  - ")
        ))
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.esql.model.as_ref())
        .or(provider_config.models.first())
        .cloned()
        .ok_or_else(|| {
            EsqlError::Configuration(format!(
                "Missing required configuration: 'model'\n\n\
                 Please provide it via:\n  \
                 - CLI option: esql --model <name>\n  \
                 - Config file: ~/.config/esql/config.toml\n  \
                 - A models list for provider '{provider_name}'"
            ))
        })?;

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        crate::warn!(
            "Model '{}' is not in the configured models list for '{}'\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let temperature = config_file.esql.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        return Err(EsqlError::Configuration(format!(
            "Invalid temperature {temperature}: expected a value between 0.0 and 2.0"
        )));
    }

    let timeout_secs = config_file.esql.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(EsqlError::Configuration(
            "Invalid timeout_secs 0: expected a positive number of seconds".to_string(),
        ));
    }

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        return Err(EsqlError::Configuration(format!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable (or add it to .env):\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/esql/config.toml"
        )));
    }

    Ok(ResolvedConfig {
        endpoint: provider_config.endpoint.clone(),
        provider_name,
        model,
        api_key,
        temperature,
        timeout: Duration::from_secs(timeout_secs),
        operation: options
            .operation
            .or(config_file.esql.operation)
            .unwrap_or_default(),
        dialect: options.db.or(config_file.esql.db).unwrap_or_default(),
    })
}
