//! Display labels and node ids

use std::collections::HashMap;

/// Turn an enum-style value into a readable label.
///
/// `GOLDEN_RETRIEVER` becomes `Golden Retriever`, or `Golden retriever` in
/// sentence case.
pub fn enum_to_readable(text: &str, sentence_case: bool) -> String {
    text.to_lowercase()
        .split('_')
        .enumerate()
        .map(|(index, word)| {
            if sentence_case && index > 0 {
                return word.to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Caller-supplied label overrides, keyed by value (or by key for children)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    overrides: HashMap<String, String>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(id.into(), label.into());
        self
    }

    /// Override for `id`, if any
    pub fn get(&self, id: &str) -> Option<&str> {
        self.overrides.get(id).map(String::as_str)
    }

    /// The first override found among `ids`, else the readable form of
    /// `fallback`
    pub fn label_for(&self, ids: &[&str], fallback: &str) -> String {
        ids.iter()
            .find_map(|id| self.get(id))
            .map(str::to_string)
            .unwrap_or_else(|| enum_to_readable(fallback, false))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Labels {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            overrides: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

pub fn parent_id(group: &str, parent_value: &str) -> String {
    format!("{group}-parent-{parent_value}")
}

pub fn child_id(group: &str, parent_id: &str, child_key: &str) -> String {
    format!("{group}-{parent_id}-child-{child_key}")
}

pub fn standalone_id(group: &str, value: &str) -> String {
    format!("{group}-standalone-{value}")
}
