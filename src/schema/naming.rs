//! Type and field naming

use convert_case::{Case, Casing};
use std::collections::{HashMap, HashSet};

/// Hands out unique type names within one schema pass
///
/// The first claim of a name gets it as-is; later claims get `2`, `3`, ...
/// appended, skipping any candidate already handed out or reserved.
#[derive(Debug, Clone, Default)]
pub struct TypeNames {
    taken: HashSet<String>,
    suffixes: HashMap<String, usize>,
}

impl TypeNames {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as taken without claiming it
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }

    /// Claim a unique camel-cased name derived from `raw`
    pub fn claim(&mut self, raw: &str) -> String {
        let cleaned: String = raw
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let mut name = cleaned.to_case(Case::Camel);
        if name.is_empty() {
            name = "field".to_string();
        }
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }

        if self.taken.insert(name.clone()) {
            return name;
        }

        let suffix = self.suffixes.entry(name.clone()).or_insert(1);
        loop {
            *suffix += 1;
            let candidate = format!("{name}{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Turn a record key into a valid field name
///
/// Characters outside `[_A-Za-z0-9]` become `_`; a leading digit gets a `_`
/// prefix.
pub fn field_key(key: &str) -> String {
    let mut out: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
