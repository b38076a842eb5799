//! Configuration file management and provider settings.

mod manager;
mod resolve;

pub use manager::{ConfigFile, ConfigManager, EsqlConfig, ProviderConfig};
pub use resolve::{
    DEFAULT_MODEL, DEFAULT_PROVIDER, ResolveOptions, ResolvedConfig, builtin_provider,
    resolve_config,
};
