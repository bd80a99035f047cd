use std::collections::HashSet;

use serde::Serialize;

/// A single environment variable found in source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvReference {
    pub name: String,
    /// The raw fallback literal after `||`, quotes included
    pub default: Option<String>,
}

impl EnvReference {
    /// A variable without a default has to be provided at runtime
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The unique set of references found during one scan, in discovery order
#[derive(Debug, Default)]
pub struct References {
    entries: Vec<EnvReference>,
    seen: HashSet<String>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference unless its name was already seen.
    ///
    /// Returns `false` when the reference was discarded.
    pub fn insert(&mut self, reference: EnvReference) -> bool {
        if !self.seen.insert(reference.name.clone()) {
            return false;
        }
        self.entries.push(reference);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// References in the order they were first discovered
    pub fn as_slice(&self) -> &[EnvReference] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<EnvReference> {
        self.entries
    }
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

    #[test]
    fn test_first_insert_wins() {
        let mut refs = References::new();
        assert!(refs.insert(reference("PORT", Some("100"))));
        assert!(!refs.insert(reference("PORT", None)));
        assert!(!refs.insert(reference("PORT", Some("200"))));
        assert_eq!(refs.len(), 1);
        assert_eq!(refs.as_slice()[0].default.as_deref(), Some("100"));
    }

    #[test]
    fn test_keeps_discovery_order() {
        let mut refs = References::new();
        refs.insert(reference("ZETA", None));
        refs.insert(reference("ALPHA", Some("1")));
        refs.insert(reference("ZETA", Some("2")));
        refs.insert(reference("MID", None));

        let names: Vec<_> = refs.into_vec().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["ZETA", "ALPHA", "MID"]);
    }

    #[test]
    fn test_is_required() {
        assert!(reference("A", None).is_required());
        assert!(!reference("A", Some("''")).is_required());
    }
}
