//! Name-keyed registry of checks
//!
//! Lookups are ASCII case-insensitive. Negation prefixes are stripped
//! verbatim (`notEmpty` becomes `Empty`), so `Empty` and `empty` must
//! resolve to the same check.

use super::Check;
use crate::checks;
use crate::error::{Result, ValidationError};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of named checks.
#[derive(Debug, Clone)]
pub struct CheckRegistry {
    checks: HashMap<String, Arc<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new registry with all built-in checks.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register_presence_checks();
        registry.register_type_checks();
        registry.register_comparison_checks();
        registry.register_text_checks();

        registry
    }

    /// Create a registry with no checks at all.
    pub fn empty() -> Self {
        Self {
            checks: HashMap::new(),
        }
    }

    /// Register a check, replacing any check already registered under `name`.
    pub fn register(&mut self, name: impl AsRef<str>, check: impl Check + 'static) {
        self.checks.insert(lookup_key(name.as_ref()), Arc::new(check));
    }

    /// Check if a check exists
    pub fn has(&self, name: &str) -> bool {
        self.checks.contains_key(&lookup_key(name))
    }

    /// Look up a check by name.
    pub fn get(&self, name: &str) -> Result<&dyn Check> {
        self.checks
            .get(&lookup_key(name))
            .map(|check| &**check)
            .ok_or_else(|| ValidationError::unknown_check(name))
    }

    /// Get all registered names (lowercased), sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.checks.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    // Registration methods for each category

    fn register_presence_checks(&mut self) {
        self.register("absent", checks::Absent);
        self.register("empty", checks::Empty);
    }

    fn register_type_checks(&mut self) {
        self.register("isString", checks::IsString);
        self.register("isNumber", checks::IsNumber);
        self.register("isInteger", checks::IsInteger);
        self.register("isFinite", checks::IsFinite);
        self.register("isBoolean", checks::IsBoolean);
        self.register("isArray", checks::IsArray);
        self.register("isObject", checks::IsObject);
    }

    fn register_comparison_checks(&mut self) {
        self.register("equals", checks::Equals);
        self.register("oneOf", checks::OneOf);
        self.register("min", checks::Min);
        self.register("max", checks::Max);
    }

    fn register_text_checks(&mut self) {
        self.register("minLength", checks::MinLength);
        self.register("maxLength", checks::MaxLength);
        self.register("matches", checks::Matches);
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup_key(name: &str) -> String {
    name.to_ascii_lowercase()
}
