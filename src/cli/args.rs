use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ResolveOptions;
use crate::operation::{Operation, TargetDialect};

#[derive(Parser, Debug)]
#[command(name = "esql")]
#[command(about = "AI-powered JPA entity / SQL conversion CLI tool")]
#[command(version)]
pub struct Args {
    /// Source file (.java or .sql; reads from stdin if not provided)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Also save the output as output.sql or output.java in this directory
    #[arg(short = 'w', long, value_name = "DIR")]
    pub write: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by one-shot generation and the interactive form.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Operation to perform
    #[arg(short = 'o', long, value_enum)]
    pub operation: Option<Operation>,

    /// Target database for generated SQL or entity mappings
    #[arg(short = 'd', long, value_enum)]
    pub db: Option<TargetDialect>,

    /// Provider name from config file (built-in: gemini)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,
}

impl GenerationArgs {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            provider: self.provider.clone(),
            model: self.model.clone(),
            operation: self.operation,
            db: self.db,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive form: pick an operation, edit input, generate, save
    Form {
        #[command(flatten)]
        generation: GenerationArgs,
    },
    /// List available operations
    Operations,
    /// List supported target databases
    Dialects,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Edit default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
