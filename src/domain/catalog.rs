//! Enumerations and reverse lookups
//!
//! An [`Enumeration`] is an ordered key → value table (e.g. `LAB = "LAB"`).
//! Toggle events carry values; the store needs keys, so every enumeration
//! gets a [`ReverseLookup`] from value back to key. Lookups are memoized per
//! enumeration identity by [`LookupCache`].
//!
//! Closed Rust enums implement [`FilterEnum`] and convert into an
//! enumeration that can never miss. String tables loaded from a definition
//! file are the trust boundary where a miss is still possible.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use indexmap::IndexMap;

use crate::error::{CheckTreeError, CheckTreeResult, LookupKind};

/// A closed set of filter identifiers known at compile time
pub trait FilterEnum: Copy + Eq + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Structural key of the variant
    fn key(self) -> &'static str;

    /// Raw value carried by toggle events and stored in buckets
    fn value(self) -> &'static str;
}

/// Ordered key → value table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    entries: IndexMap<String, String>,
}

impl Enumeration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs, keeping their order
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build from a closed enum
    pub fn of<E: FilterEnum>() -> Self {
        Self::from_pairs(E::ALL.iter().map(|e| (e.key(), e.value())))
    }

    /// Value stored under `key`
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Value → key index over one enumeration
#[derive(Debug, Clone)]
pub struct ReverseLookup {
    kind: LookupKind,
    keys: HashMap<String, String>,
}

impl ReverseLookup {
    /// Index every value of `enumeration`. When two keys share a value the
    /// later key wins.
    pub fn build(enumeration: &Enumeration, kind: LookupKind) -> Self {
        let keys = enumeration
            .iter()
            .map(|(key, value)| (value.to_string(), key.to_string()))
            .collect();
        Self { kind, keys }
    }

    /// Key for `value`, or [`CheckTreeError::LookupMiss`]
    pub fn resolve(&self, value: &str) -> CheckTreeResult<&str> {
        self.keys
            .get(value)
            .map(String::as_str)
            .ok_or_else(|| CheckTreeError::LookupMiss {
                kind: self.kind,
                value: value.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Reverse lookups memoized by enumeration identity.
///
/// Entries are keyed on the `Arc` allocation, not on contents: handing in a
/// new `Arc` (even with equal contents) rebuilds the lookup. Entries whose
/// enumeration has been dropped are pruned on the next call.
#[derive(Debug, Default)]
pub struct LookupCache {
    entries: Vec<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    source: Weak<Enumeration>,
    kind: LookupKind,
    lookup: Arc<ReverseLookup>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup for `enumeration`, building it on first use
    pub fn get(&mut self, enumeration: &Arc<Enumeration>, kind: LookupKind) -> Arc<ReverseLookup> {
        self.entries.retain(|e| e.source.strong_count() > 0);

        let hit = self.entries.iter().find(|e| {
            e.kind == kind
                && e.source
                    .upgrade()
                    .is_some_and(|source| Arc::ptr_eq(&source, enumeration))
        });
        if let Some(entry) = hit {
            return Arc::clone(&entry.lookup);
        }

        log::trace!("building {kind} reverse lookup over {} entries", enumeration.len());
        let lookup = Arc::new(ReverseLookup::build(enumeration, kind));
        self.entries.push(CacheEntry {
            source: Arc::downgrade(enumeration),
            kind,
            lookup: Arc::clone(&lookup),
        });
        lookup
    }

    /// Number of live memoized lookups
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.source.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
