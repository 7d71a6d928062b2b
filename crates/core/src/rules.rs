//! Ordered substring replacement rules applied before alphanumeric filtering.

use serde::{Deserialize, Serialize};

/// The built-in table: German transliterations plus the `Sch`/`sch` contraction.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("Sch", "S"),
    ("sch", "s"),
    ("Ä", "Ae"),
    ("Ö", "Oe"),
    ("Ü", "Ue"),
    ("ä", "ae"),
    ("ö", "oe"),
    ("ü", "ue"),
    ("ß", "ss"),
];

/// A single `from -> to` substitution as it appears in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub from: String,
    pub to: String,
}

impl ReplacementRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Immutable, ordered replacement table.
///
/// Rules are applied one after another, each replacing every occurrence of its
/// key before the next rule runs. The output of an earlier rule can therefore be
/// matched by a later one; order is part of the table's meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRules {
    rules: Vec<ReplacementRule>,
}

impl ReplacementRules {
    /// Build a table from `(from, to)` pairs, keeping the caller's order.
    pub fn new<I, K, V>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(from, to)| ReplacementRule::new(from, to))
                .collect(),
        }
    }

    /// A table with no rules; only alphanumeric filtering applies.
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Apply every rule in order. Empty keys are skipped.
    pub fn apply(&self, input: &str) -> String {
        let mut out = input.to_string();
        for rule in self.rules.iter().filter(|r| !r.from.is_empty()) {
            if out.contains(rule.from.as_str()) {
                out = out.replace(rule.from.as_str(), &rule.to);
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplacementRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The table as an owned list, for writing back into configuration.
    pub fn to_vec(&self) -> Vec<ReplacementRule> {
        self.rules.clone()
    }
}

impl Default for ReplacementRules {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.iter().copied())
    }
}

impl From<Vec<ReplacementRule>> for ReplacementRules {
    fn from(rules: Vec<ReplacementRule>) -> Self {
        Self { rules }
    }
}
