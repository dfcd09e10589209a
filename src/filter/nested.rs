//! Nested (parent/child) filter
//!
//! Binds the parent and child enumerations, the mapping between them, and
//! display settings for one filter group. The filter itself holds no
//! selection state; it turns a toggle plus the group's current
//! [`CheckedSet`] into the next one, and a [`CheckedSet`] into a
//! [`FilterView`].

use std::sync::Arc;

use crate::config::{FilterOptions, IncludeOther, OTHER_DEFAULT};
use crate::domain::labels::{child_id, parent_id};
use crate::domain::sort::ordered;
use crate::domain::{
    apply_toggle, CheckedSet, Enumeration, Labels, LookupCache, Mapping, NodeStateResolver,
    ReverseLookup, SortWeights, Toggle, ToggleContext, ToggleOutcome,
};
use crate::error::{CheckTreeError, CheckTreeResult, LookupKind};

use super::view::{ChildNode, FilterView, ParentNode};

/// A parent/child checkbox tree for one filter group
#[derive(Debug, Clone)]
pub struct NestedFilter {
    key: String,
    parents: Arc<Enumeration>,
    children: Arc<Enumeration>,
    parent_lookup: Arc<ReverseLookup>,
    child_lookup: Arc<ReverseLookup>,
    mapping: Mapping,
    parent_sort: Option<SortWeights>,
    child_sort: Option<SortWeights>,
    labels: Labels,
    include_other: IncludeOther,
}

/// Builder for [`NestedFilter`]
#[derive(Debug)]
pub struct NestedFilterBuilder {
    key: String,
    parents: Arc<Enumeration>,
    children: Arc<Enumeration>,
    mapping: Mapping,
    parent_sort: Option<SortWeights>,
    child_sort: Option<SortWeights>,
    labels: Labels,
    include_other: IncludeOther,
}

impl NestedFilterBuilder {
    pub fn parent_sort(mut self, weights: SortWeights) -> Self {
        self.parent_sort = Some(weights);
        self
    }

    pub fn child_sort(mut self, weights: SortWeights) -> Self {
        self.child_sort = Some(weights);
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn include_other(mut self, include_other: impl Into<IncludeOther>) -> Self {
        self.include_other = include_other.into();
        self
    }

    pub fn build(self) -> NestedFilter {
        self.build_with_cache(&mut LookupCache::new())
    }

    /// Build, reusing reverse lookups already made for the same
    /// enumerations
    pub fn build_with_cache(self, cache: &mut LookupCache) -> NestedFilter {
        let parent_lookup = cache.get(&self.parents, LookupKind::Parent);
        let child_lookup = cache.get(&self.children, LookupKind::Child);
        NestedFilter {
            key: self.key,
            parents: self.parents,
            children: self.children,
            parent_lookup,
            child_lookup,
            mapping: self.mapping,
            parent_sort: self.parent_sort,
            child_sort: self.child_sort,
            labels: self.labels,
            include_other: self.include_other,
        }
    }
}

impl NestedFilter {
    pub fn builder(
        key: impl Into<String>,
        parents: Arc<Enumeration>,
        children: Arc<Enumeration>,
        mapping: Mapping,
    ) -> NestedFilterBuilder {
        NestedFilterBuilder {
            key: key.into(),
            parents,
            children,
            mapping,
            parent_sort: None,
            child_sort: None,
            labels: Labels::new(),
            include_other: IncludeOther::default(),
        }
    }

    /// Filter group key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn parents(&self) -> &Arc<Enumeration> {
        &self.parents
    }

    pub fn children(&self) -> &Arc<Enumeration> {
        &self.children
    }

    pub fn includes_other(&self, parent_value: &str) -> bool {
        self.include_other.for_parent(parent_value)
    }

    /// Value of a parent key
    pub fn parent_value(&self, parent_key: &str) -> CheckTreeResult<&str> {
        self.parents
            .value(parent_key)
            .ok_or_else(|| CheckTreeError::UnknownKey {
                kind: LookupKind::Parent,
                key: parent_key.to_string(),
            })
    }

    /// Key of a parent value
    pub fn parent_key(&self, parent_value: &str) -> CheckTreeResult<&str> {
        self.parent_lookup.resolve(parent_value)
    }

    /// Key of a child value
    pub fn child_key(&self, child_value: &str) -> CheckTreeResult<&str> {
        self.child_lookup.resolve(child_value)
    }

    /// Mapped children of `parent_value`, empty when unmapped
    pub fn children_of(&self, parent_value: &str) -> &[String] {
        self.mapping.children(parent_value).unwrap_or(&[])
    }

    /// Empty buckets for a freshly mounted group
    pub fn initial_set(&self, options: &FilterOptions) -> CheckedSet {
        let mut set = CheckedSet::with_buckets(&options.bucket_names);
        if self.include_other.any() {
            set.ensure_bucket(options.other_bucket());
        }
        set
    }

    /// Next buckets of this group after one toggle.
    ///
    /// `child_key` is `None` for the parent checkbox, or the other bucket
    /// name for the other pseudo-child (whose `value` is the parent value).
    pub fn next_set(
        &self,
        current: Option<&CheckedSet>,
        options: &FilterOptions,
        parent_key: &str,
        child_key: Option<&str>,
        value: &str,
        checked: bool,
    ) -> CheckTreeResult<(CheckedSet, ToggleOutcome)> {
        let parent_value = self.parent_value(parent_key)?;
        if !self.mapping.contains_parent(parent_value) {
            return Err(CheckTreeError::UnknownParent {
                group: self.key.clone(),
                value: parent_value.to_string(),
            });
        }
        let children = self.children_of(parent_value);
        let other_enabled = self.includes_other(parent_value);
        let is_other = other_enabled && child_key == Some(options.other_bucket());

        // Parent and other toggles carry the parent value; a child toggle
        // carries the value of its own key, which must be mapped here.
        let expected = match child_key {
            Some(child_key) if !is_other => {
                let child_value = self.children.value(child_key).ok_or_else(|| {
                    CheckTreeError::UnknownKey {
                        kind: LookupKind::Child,
                        key: child_key.to_string(),
                    }
                })?;
                if !children.iter().any(|c| c == child_value) {
                    return Err(CheckTreeError::UnmappedChild {
                        group: self.key.clone(),
                        parent: parent_value.to_string(),
                        child: child_value.to_string(),
                    });
                }
                (LookupKind::Child, child_value)
            }
            _ => (LookupKind::Parent, parent_value),
        };
        if value != expected.1 {
            return Err(CheckTreeError::LookupMiss {
                kind: expected.0,
                value: value.to_string(),
            });
        }

        let ctx = ToggleContext {
            buckets: &options.bucket_names,
            other_bucket: options.other_bucket(),
            collapse: options.replace_children_with_parent_on_all_checked,
            other_enabled,
            other_in_use: self.include_other.any(),
            parent_value,
            children,
        };
        let toggle = Toggle {
            child_key,
            value,
            checked,
        };

        let empty;
        let current = match current {
            Some(set) => set,
            None => {
                empty = self.initial_set(options);
                &empty
            }
        };
        Ok(apply_toggle(current, &ctx, &toggle))
    }

    pub fn resolver<'a>(
        &self,
        set: Option<&'a CheckedSet>,
        options: &'a FilterOptions,
    ) -> NodeStateResolver<'a> {
        NodeStateResolver::new(set, &options.bucket_names, options.other_bucket())
    }

    /// Ordered nodes with display flags for `set`.
    ///
    /// Fails with a lookup miss if a mapped value has no key in its
    /// enumeration.
    pub fn view(&self, set: Option<&CheckedSet>, options: &FilterOptions) -> CheckTreeResult<FilterView> {
        let resolver = self.resolver(set, options);
        let mut parents = Vec::with_capacity(self.mapping.len());

        for parent_value in ordered(self.mapping.parents(), self.parent_sort.as_ref()) {
            let parent_key = self.parent_key(parent_value)?;
            let pid = parent_id(&self.key, parent_value);
            let children = self.children_of(parent_value);
            let other_enabled = self.includes_other(parent_value);

            let mut child_nodes = Vec::with_capacity(children.len());
            for child_value in ordered(children.iter().map(String::as_str), self.child_sort.as_ref()) {
                let child_key = self.child_key(child_value)?;
                child_nodes.push(ChildNode {
                    id: child_id(&self.key, &pid, child_key),
                    key: child_key.to_string(),
                    value: child_value.to_string(),
                    label: self.labels.label_for(&[child_key, child_value], child_value),
                    checked: resolver.child_state(child_value, parent_value).checked,
                });
            }

            let other = other_enabled.then(|| ChildNode {
                id: child_id(&self.key, &pid, OTHER_DEFAULT),
                key: options.other_bucket().to_string(),
                value: parent_value.to_string(),
                label: options.other_label().to_string(),
                checked: resolver.other_state(parent_value).checked,
            });

            let state = resolver.parent_state(parent_value, children, other_enabled);
            parents.push(ParentNode {
                id: pid,
                key: parent_key.to_string(),
                value: parent_value.to_string(),
                label: self.labels.label_for(&[parent_value, parent_key], parent_value),
                checked: state.checked,
                indeterminate: state.indeterminate,
                children: child_nodes,
                other,
            });
        }

        Ok(FilterView {
            key: self.key.clone(),
            parents,
        })
    }
}
