//! Node display state
//!
//! Derives checked / indeterminate flags for parent, child and other nodes
//! from a group's [`CheckedSet`]. Nothing here is stored; flags are
//! recomputed from the record on every read.

use super::record::CheckedSet;
use crate::config::BucketNames;

/// Tri-state selection shown for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Fully checked (●)
    Selected,
    /// Nothing checked (○)
    Unselected,
    /// Some but not all descendants checked (◐)
    Partial,
}

/// Display flags of a parent node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParentState {
    pub checked: bool,
    pub indeterminate: bool,
}

impl ParentState {
    /// Indeterminate takes precedence over checked, as a tri-state checkbox
    /// draws it.
    pub fn selection(&self) -> SelectionState {
        if self.indeterminate {
            SelectionState::Partial
        } else if self.checked {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        }
    }
}

/// Display flags of a child or other node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChildState {
    pub checked: bool,
}

impl ChildState {
    pub fn selection(&self) -> SelectionState {
        if self.checked {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        }
    }
}

/// Read-only view over one group's record
#[derive(Debug, Clone, Copy)]
pub struct NodeStateResolver<'a> {
    set: Option<&'a CheckedSet>,
    buckets: &'a BucketNames,
    other_bucket: &'a str,
}

impl<'a> NodeStateResolver<'a> {
    /// `set` is `None` for a group with no record yet; every node then
    /// resolves to unchecked.
    pub fn new(set: Option<&'a CheckedSet>, buckets: &'a BucketNames, other_bucket: &'a str) -> Self {
        Self {
            set,
            buckets,
            other_bucket,
        }
    }

    fn has(&self, bucket: &str, value: &str) -> bool {
        self.set.is_some_and(|set| set.contains(bucket, value))
    }

    fn parent_listed(&self, parent_value: &str) -> bool {
        self.has(&self.buckets.parent, parent_value)
    }

    /// Parent listed, or every child listed. A parent with no children is
    /// never complete through its children.
    pub fn all_children_checked(&self, parent_value: &str, children: &[String]) -> bool {
        let every_child = !children.is_empty()
            && children.iter().all(|c| self.has(&self.buckets.child, c));
        every_child || self.parent_listed(parent_value)
    }

    pub fn is_parent_checked(&self, parent_value: &str, children: &[String]) -> bool {
        self.parent_listed(parent_value) || self.all_children_checked(parent_value, children)
    }

    /// A listed parent stands in for every one of its children
    pub fn is_child_checked(&self, child_value: &str, parent_value: &str) -> bool {
        self.has(&self.buckets.child, child_value) || self.parent_listed(parent_value)
    }

    pub fn other_checked(&self, parent_value: &str) -> bool {
        self.has(self.other_bucket, parent_value)
    }

    pub fn has_any_checked(&self, parent_value: &str, children: &[String], other_enabled: bool) -> bool {
        children.iter().any(|c| self.has(&self.buckets.child, c))
            || (other_enabled && self.other_checked(parent_value))
    }

    /// Some descendants checked but not the whole group. With the other
    /// pseudo-child enabled the group is only whole once other is checked
    /// too.
    pub fn is_parent_indeterminate(
        &self,
        parent_value: &str,
        children: &[String],
        other_enabled: bool,
    ) -> bool {
        let all = self.all_children_checked(parent_value, children);
        let fully_checked = if other_enabled {
            all && self.other_checked(parent_value)
        } else {
            all
        };
        self.has_any_checked(parent_value, children, other_enabled) && !fully_checked
    }

    pub fn parent_state(&self, parent_value: &str, children: &[String], other_enabled: bool) -> ParentState {
        ParentState {
            checked: self.is_parent_checked(parent_value, children),
            indeterminate: self.is_parent_indeterminate(parent_value, children, other_enabled),
        }
    }

    pub fn child_state(&self, child_value: &str, parent_value: &str) -> ChildState {
        ChildState {
            checked: self.is_child_checked(child_value, parent_value),
        }
    }

    pub fn other_state(&self, parent_value: &str) -> ChildState {
        ChildState {
            checked: self.other_checked(parent_value),
        }
    }
}
