//! Toggle reconciliation
//!
//! Computes the next [`CheckedSet`] of one filter group from the current one
//! and a single toggle. Four cases:
//!
//! - check a child: add it; when every sibling is checked (and collapse is
//!   on) replace the siblings with the parent
//! - check a parent: drop its children, add the parent
//! - uncheck a child: remove it; if the parent was standing in for all its
//!   children, expand to every other sibling
//! - uncheck a parent: drop the parent and any residual children
//!
//! The "other" pseudo-child lives in its own bucket and is never touched by
//! collapse or expand.

use super::record::CheckedSet;
use crate::config::BucketNames;

/// Everything about the toggled node's parent group the rules need
#[derive(Debug, Clone, Copy)]
pub struct ToggleContext<'a> {
    pub buckets: &'a BucketNames,
    /// Name of the other bucket (and of the other pseudo-child key)
    pub other_bucket: &'a str,
    /// Replace a fully checked child group with its parent
    pub collapse: bool,
    /// Other pseudo-child shown under this parent
    pub other_enabled: bool,
    /// Other pseudo-child shown under any parent of the group
    pub other_in_use: bool,
    pub parent_value: &'a str,
    /// Siblings of the toggled child (children of the parent)
    pub children: &'a [String],
}

/// A single checkbox change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle<'a> {
    /// `None` for the parent checkbox
    pub child_key: Option<&'a str>,
    pub value: &'a str,
    pub checked: bool,
}

/// Which rule a toggle ended up applying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    ChildChecked,
    /// Child checked and the group collapsed into its parent
    Collapsed,
    ParentChecked,
    OtherChecked,
    ChildUnchecked,
    /// Child unchecked out of a collapsed parent
    Expanded,
    OtherUnchecked,
    ParentUnchecked,
    /// Child unchecked that was neither listed nor covered by its parent
    Unmatched,
}

impl ToggleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleOutcome::ChildChecked => "child_checked",
            ToggleOutcome::Collapsed => "collapsed",
            ToggleOutcome::ParentChecked => "parent_checked",
            ToggleOutcome::OtherChecked => "other_checked",
            ToggleOutcome::ChildUnchecked => "child_unchecked",
            ToggleOutcome::Expanded => "expanded",
            ToggleOutcome::OtherUnchecked => "other_unchecked",
            ToggleOutcome::ParentUnchecked => "parent_unchecked",
            ToggleOutcome::Unmatched => "unmatched",
        }
    }
}

/// Apply `toggle` to `current`, returning the next set and the rule used.
pub fn apply_toggle(
    current: &CheckedSet,
    ctx: &ToggleContext<'_>,
    toggle: &Toggle<'_>,
) -> (CheckedSet, ToggleOutcome) {
    let parent = ctx.buckets.parent.as_str();
    let child = ctx.buckets.child.as_str();
    let other = ctx.other_bucket;

    let mut next = current.clone();
    next.ensure_bucket(parent);
    next.ensure_bucket(child);
    if ctx.other_in_use {
        next.ensure_bucket(other);
    }

    let is_other = ctx.other_enabled && toggle.child_key == Some(other);

    let outcome = match (toggle.child_key, toggle.checked) {
        (Some(_), true) if is_other => {
            next.insert(other, toggle.value);
            ToggleOutcome::OtherChecked
        }
        // Already covered by the listed parent.
        (Some(_), true) if next.contains(parent, ctx.parent_value) => ToggleOutcome::ChildChecked,
        (Some(_), true) => {
            next.insert(child, toggle.value);
            let complete = !ctx.children.is_empty()
                && ctx.children.iter().all(|c| next.contains(child, c));
            if complete && ctx.collapse {
                for c in ctx.children {
                    next.remove(child, c);
                }
                next.insert(parent, ctx.parent_value);
                ToggleOutcome::Collapsed
            } else {
                ToggleOutcome::ChildChecked
            }
        }
        (None, true) => {
            for c in ctx.children {
                next.remove(child, c);
            }
            next.insert(parent, toggle.value);
            if ctx.other_enabled {
                next.insert(other, toggle.value);
            }
            ToggleOutcome::ParentChecked
        }
        (Some(_), false) if is_other => {
            next.remove(other, toggle.value);
            ToggleOutcome::OtherUnchecked
        }
        (Some(_), false) => {
            if next.remove(child, toggle.value) {
                ToggleOutcome::ChildUnchecked
            } else if next.contains(parent, ctx.parent_value) {
                for c in ctx.children {
                    next.insert(child, c);
                }
                next.remove(parent, ctx.parent_value);
                next.remove(child, toggle.value);
                ToggleOutcome::Expanded
            } else {
                ToggleOutcome::Unmatched
            }
        }
        (None, false) => {
            for c in ctx.children {
                next.remove(child, c);
            }
            next.remove(parent, toggle.value);
            if ctx.other_enabled {
                next.remove(other, toggle.value);
            }
            ToggleOutcome::ParentUnchecked
        }
    };

    (next, outcome)
}
