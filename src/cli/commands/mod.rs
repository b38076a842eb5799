//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive form command handler.
pub mod form;

/// One-shot generation handler.
pub mod generate;

/// Operation and dialect listings.
pub mod listings;

/// Provider listing command handler.
pub mod providers;
