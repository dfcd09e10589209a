//! Checked-set records
//!
//! A [`CheckedSet`] holds the buckets of one filter group; [`CheckedItems`]
//! is the full record across every group. Both are plain values: toggles
//! produce a new record instead of editing one in place.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::BucketNames;

/// Bucket name → checked values, for one filter group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedSet {
    buckets: BTreeMap<String, BTreeSet<String>>,
}

impl CheckedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty parent and child buckets under the configured names
    pub fn with_buckets(names: &BucketNames) -> Self {
        let mut set = Self::new();
        set.ensure_bucket(&names.parent);
        set.ensure_bucket(&names.child);
        set
    }

    /// Create `name` as an empty bucket if it is missing
    pub fn ensure_bucket(&mut self, name: &str) {
        if !self.buckets.contains_key(name) {
            self.buckets.insert(name.to_string(), BTreeSet::new());
        }
    }

    pub fn has_bucket(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    pub fn bucket(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.buckets.get(name)
    }

    pub fn contains(&self, bucket: &str, value: &str) -> bool {
        self.buckets
            .get(bucket)
            .is_some_and(|values| values.contains(value))
    }

    /// Add `value` to `bucket`, creating the bucket if needed.
    /// Returns true if the value was not present.
    pub fn insert(&mut self, bucket: &str, value: &str) -> bool {
        self.buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(value.to_string())
    }

    /// Returns true if the value was present
    pub fn remove(&mut self, bucket: &str, value: &str) -> bool {
        self.buckets
            .get_mut(bucket)
            .is_some_and(|values| values.remove(value))
    }

    /// Bucket names with their values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of checked values across all buckets
    fn checked_count(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    /// True when no bucket holds a value (empty buckets may exist)
    pub fn is_empty(&self) -> bool {
        self.checked_count() == 0
    }
}

/// The complete record: filter group key → [`CheckedSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedItems {
    groups: BTreeMap<String, CheckedSet>,
}

impl CheckedItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, key: &str) -> Option<&CheckedSet> {
        self.groups.get(key)
    }

    /// Copy of this record with `key` replaced by `set`
    pub fn with_group(&self, key: &str, set: CheckedSet) -> Self {
        let mut next = self.clone();
        next.groups.insert(key.to_string(), set);
        next
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &CheckedSet)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Parse a record from its JSON form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
