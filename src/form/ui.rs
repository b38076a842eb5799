//! Form mode UI components.

use crate::config::ResolvedConfig;
use crate::pipeline::{GeneratedOutput, OUTPUT_MIME_TYPE};
use crate::session::SessionContext;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lines shown in the input preview before it is cut off.
const PREVIEW_LINES: usize = 5;

pub fn print_header() {
    println!(
        "{} {} - Entity/SQL Script Tool",
        Style::header("esql"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_state(context: &SessionContext) {
    println!(
        "  {}  {}",
        Style::label("operation"),
        Style::value(context.operation)
    );
    if let Some(db) = context.effective_dialect() {
        println!("  {}         {}", Style::label("db"), Style::value(db));
    }

    if context.has_source_text() {
        let lines: Vec<&str> = context.source_text.lines().collect();
        println!(
            "  {}      {}",
            Style::label("input"),
            Style::secondary(format!("{} lines", lines.len()))
        );
        for line in lines.iter().take(PREVIEW_LINES) {
            println!("    {}", Style::secondary(line));
        }
        if lines.len() > PREVIEW_LINES {
            println!("    {}", Style::secondary("..."));
        }
    } else {
        println!(
            "  {}      {}",
            Style::label("input"),
            Style::secondary("(empty)")
        );
    }
    println!();
}

pub fn print_output(output: &GeneratedOutput) {
    println!();
    println!(
        "{} {}",
        Style::header("Generated Output"),
        Style::secondary(format!("[{}]", output.language))
    );
    println!("{}", output.text);
    println!();
    println!(
        "{}",
        Style::hint(format!(
            "Choose Save output to write {} ({OUTPUT_MIME_TYPE})",
            output.file_name()
        ))
    );
    println!();
}

pub fn print_config(config: &ResolvedConfig, context: &SessionContext) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}     {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}  {}",
        Style::label("temperature"),
        Style::value(config.temperature)
    );
    println!(
        "  {}      {}",
        Style::label("timeout"),
        Style::value(format!("{}s", config.timeout.as_secs()))
    );
    println!(
        "  {}    {}",
        Style::label("operation"),
        Style::value(context.operation)
    );
    println!(
        "  {}           {}",
        Style::label("db"),
        Style::value(context.dialect)
    );
    println!();
}

pub fn print_warning(message: &str) {
    crate::warn!("{message}\n");
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
