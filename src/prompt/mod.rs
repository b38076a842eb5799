//! Prompt templates and prompt building.

mod builder;
mod templates;

use thiserror::Error;

use crate::operation::Operation;

pub use builder::{PromptValues, build};
pub use templates::{PromptTemplate, TemplateField, placeholders, select, validate_all};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Template for '{operation}' requires a value for '{}'", .field.name())]
    MissingField {
        operation: Operation,
        field: TemplateField,
    },

    #[error("Template for '{operation}' references undeclared placeholder '{{{name}}}'")]
    UndeclaredPlaceholder { operation: Operation, name: String },

    #[error("Template for '{operation}' declares '{}' but never uses it", .field.name())]
    UnusedField {
        operation: Operation,
        field: TemplateField,
    },
}
