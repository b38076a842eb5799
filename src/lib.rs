//! # esql - Entity/SQL conversion CLI
//!
//! `esql` turns JPA entity classes into SQL migration scripts, SQL table
//! definitions into JPA entities, and explains SQL scripts in plain English.
//! The work is done by a language model behind any OpenAI-compatible chat
//! completions endpoint (Gemini by default).
//!
//! ## Quick Start
//!
//! ```bash
//! export GOOGLE_API_KEY=...
//!
//! # Entity to PostgreSQL DDL
//! esql User.java --db postgresql
//!
//! # SQL to entity, saving output.sql next to the input
//! esql schema.sql -o sql-to-entity -w .
//!
//! # Explain a script from stdin
//! cat migrate.sql | esql -o explain-sql
//!
//! # Interactive form
//! esql form
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/esql/config.toml`:
//!
//! ```toml
//! [esql]
//! provider = "openai"
//! model = "gpt-4o-mini"
//! db = "postgresql"
//!
//! [providers.openai]
//! endpoint = "https://api.openai.com/v1"
//! api_key_env = "OPENAI_API_KEY"
//! models = ["gpt-4o-mini"]
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Completion client adapter for OpenAI-compatible endpoints.
pub mod completion;

/// Configuration file management and provider settings.
pub mod config;

/// Error taxonomy and exit codes.
pub mod error;

/// Interactive form mode.
pub mod form;

/// File system utilities.
pub mod fs;

/// Source text input from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Markdown code-fence stripping.
pub mod normalize;

/// Operations, target databases and output language hints.
pub mod operation;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Single-request generation pipeline.
pub mod pipeline;

/// Prompt templates and prompt building.
pub mod prompt;

/// Per-session input state.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
