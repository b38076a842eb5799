use std::collections::BTreeSet;

use super::PromptError;
use crate::operation::Operation;

/// A named substitution point inside a prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateField {
    /// The user's source text (entity class or SQL script).
    Entity,
    /// The target database name.
    Db,
}

impl TemplateField {
    pub const ALL: [Self; 2] = [Self::Entity, Self::Db];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Db => "db",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Instruction text for one operation plus the fields it references.
#[derive(Debug)]
pub struct PromptTemplate {
    pub operation: Operation,
    pub text: &'static str,
    fields: &'static [TemplateField],
}

impl PromptTemplate {
    pub fn required_fields(&self) -> BTreeSet<TemplateField> {
        self.fields.iter().copied().collect()
    }

    /// Checks that the text references exactly the declared fields.
    pub fn validate(&self) -> Result<(), PromptError> {
        let declared = self.required_fields();
        let found = placeholders(self.text);

        if let Some(name) = found
            .iter()
            .find(|name| TemplateField::from_name(name).is_none_or(|f| !declared.contains(&f)))
        {
            return Err(PromptError::UndeclaredPlaceholder {
                operation: self.operation,
                name: name.clone(),
            });
        }

        if let Some(field) = declared.iter().find(|f| !found.contains(f.name())) {
            return Err(PromptError::UnusedField {
                operation: self.operation,
                field: *field,
            });
        }

        Ok(())
    }
}

const ENTITY_TO_SQL: &str = "
You are a SQL migration assistant.
Target database: {db}

Given this Java Spring Boot Entity class:
{entity}

Generate:
1. Forward SQL to create this table.
2. Rollback SQL to drop this table.

Use syntax specific to {db}. Return only SQL code.
";

const SQL_TO_ENTITY: &str = "
You are a Java Spring Boot assistant.
Target database: {db}

Given this SQL table definition:
{entity}

Generate a Java Spring Boot JPA Entity class for the table.
Use proper annotations like @Entity, @Id, @Column, etc.
Return Java code only. No explanation.
";

const EXPLAIN_SQL: &str = "
You are a technical writer.

Given this SQL script:
{entity}

Explain what the SQL does in simple, clear English.
Only return explanation, no code or comments.
";

static TEMPLATES: [PromptTemplate; 3] = [
    PromptTemplate {
        operation: Operation::EntityToSql,
        text: ENTITY_TO_SQL,
        fields: &[TemplateField::Entity, TemplateField::Db],
    },
    PromptTemplate {
        operation: Operation::SqlToEntity,
        text: SQL_TO_ENTITY,
        fields: &[TemplateField::Entity, TemplateField::Db],
    },
    PromptTemplate {
        operation: Operation::ExplainSql,
        text: EXPLAIN_SQL,
        fields: &[TemplateField::Entity],
    },
];

/// Returns the template for an operation.
pub fn select(operation: Operation) -> &'static PromptTemplate {
    match operation {
        Operation::EntityToSql => &TEMPLATES[0],
        Operation::SqlToEntity => &TEMPLATES[1],
        Operation::ExplainSql => &TEMPLATES[2],
    }
}

/// Validates every template in the table.
pub fn validate_all() -> Result<(), PromptError> {
    TEMPLATES.iter().try_for_each(PromptTemplate::validate)
}

/// Collects the `{name}` placeholders in a template text.
///
/// A placeholder is a brace pair enclosing a non-empty run of ASCII
/// lowercase letters or underscores.
pub fn placeholders(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        rest = &rest[open + 1..];
        let Some(close) = rest.find('}') else {
            break;
        };
        let candidate = &rest[..close];
        if is_placeholder_name(candidate) {
            names.insert(candidate.to_string());
            rest = &rest[close + 1..];
        }
    }

    names
}

pub(super) fn is_placeholder_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_')
}
