//! Display ordering of parents and children

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Value → sort weight. Ascending; values without an entry weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortWeights {
    weights: HashMap<String, i64>,
}

impl SortWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, value: impl Into<String>, weight: i64) -> Self {
        self.weights.insert(value.into(), weight);
        self
    }

    pub fn weight(&self, value: &str) -> i64 {
        self.weights.get(value).copied().unwrap_or(0)
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for SortWeights {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }
}

/// Order `values` for display.
///
/// With a weight table the sort is by weight and stable, so equal weights
/// keep their input order. Without one, values sort lexicographically.
pub fn ordered<'a, I>(values: I, weights: Option<&SortWeights>) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut values: Vec<&str> = values.into_iter().collect();
    match weights {
        Some(weights) => values.sort_by_key(|v| weights.weight(v)),
        None => values.sort_unstable(),
    }
    values
}
