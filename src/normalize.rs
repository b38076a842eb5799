//! Cleanup of model output before display.

const FENCE: &str = "```";

/// Removes a surrounding Markdown code fence from generated text.
///
/// Fenced input has every backtick stripped from both edges, its first
/// line (the language tag, e.g. `sql`) dropped, and the remainder trimmed.
/// Fenced input without a newline after the opening backticks therefore
/// normalizes to an empty string. Unfenced input is returned unchanged.
pub fn normalize(raw: &str) -> String {
    if !raw.starts_with(FENCE) {
        return raw.to_string();
    }

    let unfenced = raw.trim_matches('`');
    let body = unfenced.split_once('\n').map_or("", |(_, rest)| rest);

    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fenced_with_language_tag() {
        assert_eq!(normalize("```sql\nSELECT 1;```"), "SELECT 1;");
        assert_eq!(normalize("```sql\nSELECT 1;\n```"), "SELECT 1;");
    }

    #[test]
    fn test_normalize_fenced_multiline_java() {
        let raw = "```java\n@Entity\npublic class User {\n    @Id\n    private Long id;\n}\n```";
        assert_eq!(
            normalize(raw),
            "@Entity\npublic class User {\n    @Id\n    private Long id;\n}"
        );
    }

    #[test]
    fn test_normalize_fence_without_language_tag() {
        assert_eq!(normalize("```\nSELECT 1;\n```"), "SELECT 1;");
    }

    #[test]
    fn test_normalize_keeps_closing_fence_after_trailing_newline() {
        // Only backticks at the very edges are stripped.
        assert_eq!(normalize("```sql\nSELECT 1;\n```\n"), "SELECT 1;\n```");
    }

    #[test]
    fn test_normalize_single_line_fence_is_empty() {
        assert_eq!(normalize("```SELECT 1;```"), "");
    }

    #[test]
    fn test_normalize_unfenced_is_unchanged() {
        assert_eq!(normalize("SELECT 1;"), "SELECT 1;");
        assert_eq!(normalize("  SELECT 1;\n"), "  SELECT 1;\n");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_inner_fence_not_at_start() {
        let raw = "Here you go:\n```sql\nSELECT 1;\n```";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn test_normalize_idempotent_on_unfenced() {
        for s in ["SELECT 1;", "", "  padded  ", "line\n```\n", "`single`"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }
}
