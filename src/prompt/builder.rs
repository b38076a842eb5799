use super::PromptError;
use super::templates::{PromptTemplate, TemplateField, is_placeholder_name};
use crate::operation::TargetDialect;

/// Values available for substitution into a template.
///
/// Values the template does not reference are ignored.
#[derive(Debug, Clone)]
pub struct PromptValues<'a> {
    pub entity: &'a str,
    pub db: Option<TargetDialect>,
}

impl<'a> PromptValues<'a> {
    pub const fn new(entity: &'a str, db: Option<TargetDialect>) -> Self {
        Self { entity, db }
    }

    fn get(&self, field: TemplateField) -> Option<&'a str> {
        match field {
            TemplateField::Entity => Some(self.entity),
            TemplateField::Db => self.db.map(TargetDialect::name),
        }
    }
}

/// Fills a template's placeholders with the given values.
///
/// Substitution is one literal left-to-right pass over the template text,
/// so brace sequences inside the substituted values are copied verbatim.
pub fn build(template: &PromptTemplate, values: &PromptValues<'_>) -> Result<String, PromptError> {
    for field in template.required_fields() {
        if values.get(field).is_none() {
            return Err(PromptError::MissingField {
                operation: template.operation,
                field,
            });
        }
    }

    let text = template.text;
    let mut prompt = String::with_capacity(text.len() + values.entity.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        prompt.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let name = &after[..close];
            if !is_placeholder_name(name) {
                return None;
            }
            let field = TemplateField::from_name(name)?;
            values.get(field).map(|value| (value, close))
        });

        match substituted {
            Some((value, close)) => {
                prompt.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                prompt.push('{');
                rest = after;
            }
        }
    }
    prompt.push_str(rest);

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use crate::prompt::select;

    const ENTITY: &str = "@Entity\npublic class User {\n    @Id\n    private Long id;\n}";

    #[test]
    fn test_build_entity_to_sql_contains_snippet_and_dialect() {
        let template = select(Operation::EntityToSql);
        let prompt = build(
            template,
            &PromptValues::new(ENTITY, Some(TargetDialect::PostgreSql)),
        )
        .unwrap();

        assert!(prompt.contains(ENTITY));
        assert!(prompt.contains("Target database: PostgreSQL"));
        assert!(prompt.contains("Use syntax specific to PostgreSQL."));
        assert!(!prompt.contains("{db}"));
        assert!(!prompt.contains("{entity}"));
    }

    #[test]
    fn test_build_explain_ignores_extra_dialect() {
        let template = select(Operation::ExplainSql);
        let with_db = build(
            template,
            &PromptValues::new("DROP TABLE foo;", Some(TargetDialect::Oracle)),
        )
        .unwrap();
        let without_db = build(template, &PromptValues::new("DROP TABLE foo;", None)).unwrap();

        assert_eq!(with_db, without_db);
        assert!(with_db.contains("DROP TABLE foo;"));
        assert!(!with_db.contains("Oracle"));
    }

    #[test]
    fn test_build_missing_dialect_is_error() {
        let template = select(Operation::SqlToEntity);
        let result = build(template, &PromptValues::new("CREATE TABLE t (id INT);", None));

        assert!(matches!(
            result,
            Err(PromptError::MissingField {
                field: TemplateField::Db,
                ..
            })
        ));
    }

    #[test]
    fn test_build_distinguishes_every_input() {
        let template = select(Operation::EntityToSql);
        let base = build(template, &PromptValues::new("a", Some(TargetDialect::MySql))).unwrap();
        let other_entity =
            build(template, &PromptValues::new("b", Some(TargetDialect::MySql))).unwrap();
        let other_db =
            build(template, &PromptValues::new("a", Some(TargetDialect::Oracle))).unwrap();

        assert_ne!(base, other_entity);
        assert_ne!(base, other_db);
        assert_ne!(other_entity, other_db);
    }

    #[test]
    fn test_build_does_not_expand_placeholders_in_values() {
        let template = select(Operation::EntityToSql);
        let source = "-- uses {db} and {entity} literally";
        let prompt = build(template, &PromptValues::new(source, Some(TargetDialect::MySql))).unwrap();

        assert!(prompt.contains(source));
    }

    #[test]
    fn test_build_is_deterministic() {
        let template = select(Operation::SqlToEntity);
        let values = PromptValues::new("CREATE TABLE t (id INT);", Some(TargetDialect::SqlServer));
        assert_eq!(build(template, &values).unwrap(), build(template, &values).unwrap());
    }
}
