use crate::operation::{Operation, TargetDialect};
use crate::ui::Style;

/// Prints all operations with their CLI values.
pub fn print_operations() {
    println!("{}", Style::header("Operations"));
    for op in Operation::ALL {
        let marker = if op == Operation::default() {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {:14} {}{marker}",
            Style::code(op.cli_value()),
            Style::secondary(op.description())
        );
    }
}

/// Prints all target databases with their CLI values.
pub fn print_dialects() {
    println!("{}", Style::header("Target databases"));
    for db in TargetDialect::ALL {
        let marker = if db == TargetDialect::default() {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {:11} {}{marker}",
            Style::code(db.cli_value()),
            Style::secondary(db.name())
        );
    }
    println!();
    println!(
        "{}",
        Style::hint("The target database is ignored by explain-sql.")
    );
}
