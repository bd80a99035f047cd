//! Variable listings written to the generated files

use crate::scan::EnvReference;

pub const NO_VARIABLES: &str = "# NO ENVIRONMENT VARIABLES FOUND";
pub const NO_REQUIRED_VARIABLES: &str = "# NO REQUIRED ENVIRONMENT VARIABLES FOUND";

/// Format every reference as `NAME=default`, sorted by name
pub fn format_listing(references: &[EnvReference]) -> String {
    if references.is_empty() {
        return format!("{}\n", NO_VARIABLES);
    }

    sorted(references)
        .into_iter()
        .map(|r| format!("{}={}\n", r.name, r.default.as_deref().unwrap_or("")))
        .collect()
}

/// Format only the references without a default, sorted by name
pub fn format_required_listing(references: &[EnvReference]) -> String {
    let required: Vec<_> = sorted(references)
        .into_iter()
        .filter(|r| r.is_required())
        .collect();

    if required.is_empty() {
        return format!("{}\n", NO_REQUIRED_VARIABLES);
    }

    required.iter().map(|r| format!("{}=\n", r.name)).collect()
}

/// Format references as a JSON array, sorted by name
pub fn format_listing_json(references: &[EnvReference]) -> String {
    serde_json::to_string_pretty(&sorted(references)).unwrap_or_else(|_| "[]".to_string())
}

fn sorted(references: &[EnvReference]) -> Vec<&EnvReference> {
    let mut sorted: Vec<_> = references.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str, default: Option<&str>) -> EnvReference {
        EnvReference {
            name: name.to_string(),
            default: default.map(str::to_string),
        }
    }

    fn sample() -> Vec<EnvReference> {
        vec![
            reference("TEST_REQUIRED", None),
            reference("NODE_ENV", Some("'development'")),
            reference("TEST_NUMBER", Some("100")),
            reference("API_KEY", None),
        ]
    }

    #[test]
    fn test_listing_sorted_with_raw_defaults() {
        assert_eq!(
            format_listing(&sample()),
            "API_KEY=\nNODE_ENV='development'\nTEST_NUMBER=100\nTEST_REQUIRED=\n"
        );
    }

    #[test]
    fn test_listing_one_line_per_variable() {
        assert_eq!(format_listing(&sample()).lines().count(), 4);
    }

    #[test]
    fn test_listing_empty() {
        assert_eq!(format_listing(&[]), "# NO ENVIRONMENT VARIABLES FOUND\n");
    }

    #[test]
    fn test_required_listing() {
        assert_eq!(
            format_required_listing(&sample()),
            "API_KEY=\nTEST_REQUIRED=\n"
        );
    }

    #[test]
    fn test_required_listing_none_required() {
        let refs = vec![reference("PORT", Some("3000"))];
        assert_eq!(
            format_required_listing(&refs),
            "# NO REQUIRED ENVIRONMENT VARIABLES FOUND\n"
        );
    }

    #[test]
    fn test_required_listing_empty() {
        assert_eq!(
            format_required_listing(&[]),
            "# NO REQUIRED ENVIRONMENT VARIABLES FOUND\n"
        );
    }

    #[test]
    fn test_listing_json() {
        let json = format_listing_json(&sample());
        assert!(json.find("API_KEY").unwrap() < json.find("TEST_REQUIRED").unwrap());
        assert!(json.contains("\"default\": \"100\""));
        assert!(json.contains("\"default\": null"));
    }
}
