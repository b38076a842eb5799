//! Per-session input state.

use crate::operation::{Operation, TargetDialect};

/// Inputs that persist between generations in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub operation: Operation,
    pub dialect: TargetDialect,
    pub source_text: String,
}

impl SessionContext {
    pub const fn new(operation: Operation, dialect: TargetDialect) -> Self {
        Self {
            operation,
            dialect,
            source_text: String::new(),
        }
    }

    /// Switches to `operation`, clearing the source text if it changed.
    #[must_use]
    pub fn on_operation_change(self, operation: Operation) -> Self {
        if operation == self.operation {
            return self;
        }
        Self {
            operation,
            dialect: self.dialect,
            source_text: String::new(),
        }
    }

    #[must_use]
    pub fn with_dialect(self, dialect: TargetDialect) -> Self {
        Self { dialect, ..self }
    }

    #[must_use]
    pub fn with_source_text(self, source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            ..self
        }
    }

    /// The dialect to substitute, or `None` when the operation has no use for it.
    pub const fn effective_dialect(&self) -> Option<TargetDialect> {
        if self.operation.needs_dialect() {
            Some(self.dialect)
        } else {
            None
        }
    }

    pub fn has_source_text(&self) -> bool {
        !self.source_text.trim().is_empty()
    }
}
