//! Checker configuration
//!
//! Known platform quirks are expressed as injectable exemption tables
//! rather than inline name literals, so a harness can supply its own
//! allow-lists without touching the checker.

use std::collections::HashSet;

/// Configuration for a checking run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Classes that are known to be unloadable in the checked environment.
    /// A declared class on this list is skipped silently instead of being
    /// reported missing.
    pub skip_classes: HashSet<String>,
    /// Classes with a known superclass discrepancy between the API
    /// description and the runtime. Superclass comparison is waived.
    pub superclass_exemptions: HashSet<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exempt `class_name` (canonical) from loading entirely.
    pub fn skip_class(mut self, class_name: &str) -> Self {
        self.skip_classes.insert(class_name.to_string());
        self
    }

    /// Waive the superclass check for `class_name` (canonical).
    pub fn exempt_superclass(mut self, class_name: &str) -> Self {
        self.superclass_exemptions.insert(class_name.to_string());
        self
    }
}
