use std::sync::LazyLock;

use regex::Regex;

use crate::scan::EnvReference;

// `= process.env.NAME` or `: process.env.NAME`, optionally followed by
// `|| <default>` where the default is a quoted string, a boolean or a number.
static ENV_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"[:=]\s*process\.env\.([A-Z0-9_]+)"#,
        r#"(?:\s*\|\|\s*"#,
        r#"("[^\n\r"]*"|'[^\n\r']*'|[Tt][Rr][Uu][Ee]|[Ff][Aa][Ll][Ss][Ee]|[0-9.]*)"#,
        r#")?"#,
    ))
    .unwrap()
});

/// Parse every environment variable access in `content`, left to right.
///
/// Repeated names are returned as many times as they appear; de-duplication
/// is the caller's job.
pub fn parse_env_references(content: &str) -> impl Iterator<Item = EnvReference> + '_ {
    ENV_ACCESS.captures_iter(content).map(|caps| {
        let name = caps[1].to_string();
        // An empty digit run is not a default
        let default = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        EnvReference { name, default }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<EnvReference> {
        parse_env_references(content).collect()
    }

    #[test]
    fn test_single_quoted_default() {
        let refs = parse("const env = process.env.NODE_ENV || 'development';");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "NODE_ENV");
        assert_eq!(refs[0].default.as_deref(), Some("'development'"));
    }

    #[test]
    fn test_double_quoted_default() {
        let refs = parse(r#"host: process.env.HOST || "localhost","#);
        assert_eq!(refs[0].default.as_deref(), Some(r#""localhost""#));
    }

    #[test]
    fn test_boolean_default_any_case() {
        let refs = parse("a = process.env.A || TRUE\nb = process.env.B||false");
        assert_eq!(refs[0].default.as_deref(), Some("TRUE"));
        assert_eq!(refs[1].default.as_deref(), Some("false"));
    }

    #[test]
    fn test_numeric_default() {
        let refs = parse("const port = process.env.PORT || 8080.5;");
        assert_eq!(refs[0].default.as_deref(), Some("8080.5"));
    }

    #[test]
    fn test_no_default() {
        let refs = parse("const x = process.env.TEST_REQUIRED;");
        assert_eq!(refs[0].name, "TEST_REQUIRED");
        assert_eq!(refs[0].default, None);
    }

    #[test]
    fn test_non_literal_default_is_ignored() {
        let refs = parse("const x = process.env.DB_URL || buildUrl();");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].default, None);
    }

    #[test]
    fn test_requires_assignment_operator() {
        let refs = parse("process.env.NODE_ENV = 'production';\nif (process.env.DEBUG) {}");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_lowercase_names_do_not_match() {
        let refs = parse("const x = process.env.lower_case;");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_name_stops_at_lowercase() {
        let refs = parse("const x = process.env.API_key;");
        assert_eq!(refs[0].name, "API_");
    }

    #[test]
    fn test_digits_in_name() {
        let refs = parse("const x = process.env.S3_BUCKET_2 || 'b';");
        assert_eq!(refs[0].name, "S3_BUCKET_2");
    }

    #[test]
    fn test_quoted_default_cannot_span_lines() {
        let refs = parse("const x = process.env.X || 'open\nnext';");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].default, None);
    }

    #[test]
    fn test_keeps_textual_order_and_repeats() {
        let content = "a = process.env.B || 1\nb = process.env.A\nc = process.env.B || 2";
        let names: Vec<_> = parse(content).into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["B", "A", "B"]);
    }
}
