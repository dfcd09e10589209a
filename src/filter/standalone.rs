//! Standalone filter: a single checkbox with no children

use crate::config::FilterOptions;
use crate::domain::labels::standalone_id;
use crate::domain::CheckedSet;

/// A lone checkbox that records `value` in its group's parent bucket, or in
/// the child bucket when grouped with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneFilter {
    key: String,
    value: String,
    title: String,
    group_with_children: bool,
}

impl StandaloneFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            title: title.into(),
            group_with_children: false,
        }
    }

    pub fn group_with_children(mut self, group_with_children: bool) -> Self {
        self.group_with_children = group_with_children;
        self
    }

    /// Filter group key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> String {
        standalone_id(&self.key, &self.value)
    }

    /// Bucket this checkbox writes to
    pub fn bucket<'a>(&self, options: &'a FilterOptions) -> &'a str {
        if self.group_with_children {
            &options.bucket_names.child
        } else {
            &options.bucket_names.parent
        }
    }

    pub fn is_checked(&self, set: Option<&CheckedSet>, options: &FilterOptions) -> bool {
        set.is_some_and(|set| set.contains(self.bucket(options), &self.value))
    }

    /// Next buckets of the group after checking or unchecking this box
    pub fn next_set(&self, current: Option<&CheckedSet>, options: &FilterOptions, checked: bool) -> CheckedSet {
        let mut next = current
            .cloned()
            .unwrap_or_else(|| CheckedSet::with_buckets(&options.bucket_names));
        if checked {
            next.insert(self.bucket(options), &self.value);
        } else {
            next.remove(self.bucket(options), &self.value);
        }
        next
    }
}
