use anyhow::Result;
use clap::Parser;

use esql_cli::cli::commands::{configure, form, generate, listings, providers};
use esql_cli::cli::{Args, Command};
use esql_cli::error::{EsqlError, exit_code_for};
use esql_cli::output::{self, OutputConfig};
use esql_cli::ui::Style;
use esql_cli::{logging, prompt};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose, output::is_no_color());

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code_for(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Operations) => listings::print_operations(),
        Some(Command::Dialects) => listings::print_dialects(),
        Some(Command::Providers { provider }) => {
            load_dotenv();
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure { show }) => configure::run_configure(show)?,
        Some(Command::Form { generation }) => {
            load_dotenv();
            prompt::validate_all().map_err(EsqlError::from)?;
            form::run_form(generation).await?;
        }
        None => {
            load_dotenv();
            prompt::validate_all().map_err(EsqlError::from)?;
            let options = generate::GenerateOptions {
                file: args.file,
                generation: args.generation,
                write: args.write,
            };
            generate::run_generate(options).await?;
        }
    }

    Ok(())
}

/// Loads `.env` from the working directory (or a parent) if one exists.
fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable .env file: {e}"),
    }
}
