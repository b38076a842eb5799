//! Operations, target databases and output language hints.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user asks the model to do with the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Java entity class in, forward and rollback SQL out.
    #[default]
    EntityToSql,
    /// SQL table definition in, JPA entity class out.
    SqlToEntity,
    /// SQL script in, plain-English explanation out.
    ExplainSql,
}

impl Operation {
    pub const ALL: [Self; 3] = [Self::EntityToSql, Self::SqlToEntity, Self::ExplainSql];

    /// Human-readable label shown in menus and headers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EntityToSql => "Entity to SQL",
            Self::SqlToEntity => "SQL to Entity",
            Self::ExplainSql => "Explain SQL",
        }
    }

    /// Value accepted by `--operation` and the config file.
    pub const fn cli_value(self) -> &'static str {
        match self {
            Self::EntityToSql => "entity-to-sql",
            Self::SqlToEntity => "sql-to-entity",
            Self::ExplainSql => "explain-sql",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::EntityToSql => "Generate CREATE and rollback SQL from a JPA entity class",
            Self::SqlToEntity => "Generate a JPA entity class from a SQL table definition",
            Self::ExplainSql => "Explain a SQL script in plain English",
        }
    }

    /// Whether the prompt for this operation names a target database.
    pub const fn needs_dialect(self) -> bool {
        !matches!(self, Self::ExplainSql)
    }

    pub fn output_language(self) -> OutputLanguage {
        OutputLanguage::for_label(self.label())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Database product whose syntax the generated SQL must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetDialect {
    #[default]
    #[value(name = "mysql")]
    MySql,
    #[value(name = "postgresql")]
    PostgreSql,
    Oracle,
    #[value(name = "sqlserver")]
    SqlServer,
}

impl TargetDialect {
    pub const ALL: [Self; 4] = [Self::MySql, Self::PostgreSql, Self::Oracle, Self::SqlServer];

    /// Product name as it appears in prompts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::PostgreSql => "PostgreSQL",
            Self::Oracle => "Oracle",
            Self::SqlServer => "SQL Server",
        }
    }

    pub const fn cli_value(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Oracle => "oracle",
            Self::SqlServer => "sqlserver",
        }
    }
}

impl fmt::Display for TargetDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Syntax hint for displaying and saving generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLanguage {
    Sql,
    Java,
}

impl OutputLanguage {
    /// `sql` when the operation label mentions SQL, `java` otherwise.
    pub fn for_label(label: &str) -> Self {
        if label.contains("SQL") {
            Self::Sql
        } else {
            Self::Java
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Java => "java",
        }
    }

    /// File name offered for download, e.g. `output.sql`.
    pub fn file_name(self) -> String {
        format!("output.{}", self.extension())
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
