//! Namespace resolution from file paths.
//!
//! The namespace is the identifier a change notification carries and the key
//! under which records are grouped and unloaded. The same path must always
//! resolve to the same namespace for the lifetime of the process.

use regex::Regex;

/// Derives a schema namespace from a file path.
///
/// When a naming expression is configured and matches the path, the
/// namespace is capture group 1 lower-cased. Otherwise it falls back to the
/// full path lower-cased.
#[derive(Debug, Clone)]
pub struct NamespaceResolver {
    name_regex: Option<Regex>,
}

impl NamespaceResolver {
    /// Creates a resolver with an optional naming expression.
    pub fn new(name_regex: Option<Regex>) -> Self {
        Self { name_regex }
    }

    /// Creates a resolver that always falls back to the full path.
    pub fn path_only() -> Self {
        Self { name_regex: None }
    }

    /// Resolves the namespace for a path. Deterministic, no side effects.
    pub fn resolve(&self, path: &str) -> String {
        if let Some(regex) = &self.name_regex {
            if let Some(captures) = regex.captures(path) {
                if let Some(group) = captures.get(1) {
                    return group.as_str().to_lowercase();
                }
            }
        }
        path.to_lowercase()
    }
}
