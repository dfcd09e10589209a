//! Selection store
//!
//! [`Filters`] owns the mounted filters and the checked-set record of every
//! group. Each mutation builds a new [`CheckedItems`], swaps it in (unless
//! the record is controlled by the caller) and reports it to the sink.
//!
//! In controlled mode the caller owns the record: the store reads it,
//! computes the next value and emits it, and the caller hands it back with
//! [`Filters::set_controlled`] once applied.

use indexmap::IndexMap;

use crate::config::FilterOptions;
use crate::domain::{CheckedItems, ToggleOutcome};
use crate::error::{CheckTreeError, CheckTreeResult};

use super::events::{FilterChangeSink, NoopSink};
use super::nested::NestedFilter;
use super::standalone::StandaloneFilter;
use super::view::FilterView;

/// Selection store for any number of filter groups
pub struct Filters {
    options: FilterOptions,
    nested: IndexMap<String, NestedFilter>,
    checked: CheckedItems,
    controlled: Option<CheckedItems>,
    sink: Box<dyn FilterChangeSink>,
}

impl std::fmt::Debug for Filters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filters")
            .field("options", &self.options)
            .field("groups", &self.nested.keys().collect::<Vec<_>>())
            .field("checked", &self.checked)
            .field("controlled", &self.controlled.is_some())
            .finish()
    }
}

impl Filters {
    /// Create an uncontrolled store. Fails on contradictory options.
    pub fn new(options: FilterOptions) -> CheckTreeResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            nested: IndexMap::new(),
            checked: CheckedItems::new(),
            controlled: None,
            sink: Box::new(NoopSink),
        })
    }

    /// Start from caller-supplied values instead of an empty record
    pub fn with_initial(mut self, initial: CheckedItems) -> Self {
        self.checked = initial;
        self
    }

    pub fn with_sink(mut self, sink: impl FilterChangeSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Switch to controlled mode with the caller's current record
    pub fn controlled(mut self, items: CheckedItems) -> Self {
        self.controlled = Some(items);
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Hand the store the caller's latest record. Ignored when uncontrolled.
    pub fn set_controlled(&mut self, items: CheckedItems) {
        if let Some(current) = self.controlled.as_mut() {
            *current = items;
        } else {
            log::warn!("set_controlled on an uncontrolled store; ignoring");
        }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Current record: the caller's when controlled, the store's otherwise
    pub fn checked_items(&self) -> &CheckedItems {
        self.controlled.as_ref().unwrap_or(&self.checked)
    }

    pub fn filter(&self, group: &str) -> Option<&NestedFilter> {
        self.nested.get(group)
    }

    /// Mounted nested filters in mount order
    pub fn filters(&self) -> impl Iterator<Item = &NestedFilter> {
        self.nested.values()
    }

    /// Register a nested filter and seed its buckets. Values already present
    /// for the group (initial or controlled) are kept.
    pub fn mount(&mut self, filter: NestedFilter) -> CheckedItems {
        let group = filter.key().to_string();
        let mut set = self
            .checked_items()
            .group(&group)
            .cloned()
            .unwrap_or_else(|| filter.initial_set(&self.options));
        let seeded = filter.initial_set(&self.options);
        for (bucket, _) in seeded.iter() {
            set.ensure_bucket(bucket);
        }

        log::debug!("mounted filter group '{group}'");
        self.nested.insert(group.clone(), filter);
        let next = self.checked_items().with_group(&group, set);
        self.commit(next)
    }

    /// Apply one checkbox change by structural keys.
    ///
    /// `child_key` is `None` for a parent checkbox and the other bucket name
    /// for the other pseudo-child. Returns the full record.
    pub fn toggle(
        &mut self,
        group: &str,
        parent_key: &str,
        child_key: Option<&str>,
        value: &str,
        checked: bool,
    ) -> CheckTreeResult<CheckedItems> {
        let filter = self
            .nested
            .get(group)
            .ok_or_else(|| CheckTreeError::UnknownGroup {
                group: group.to_string(),
            })?;

        let current = self.checked_items();
        let (set, outcome) =
            filter.next_set(current.group(group), &self.options, parent_key, child_key, value, checked)?;

        match outcome {
            ToggleOutcome::Unmatched => {
                log::warn!("uncheck of '{value}' in '{group}' matched nothing checked");
            }
            ToggleOutcome::Collapsed | ToggleOutcome::Expanded => {
                log::debug!("'{group}' {} parent '{parent_key}'", outcome.as_str());
            }
            _ => {
                log::debug!("'{group}' {} '{value}'", outcome.as_str());
            }
        }

        let next = current.with_group(group, set);
        Ok(self.commit(next))
    }

    /// Apply a checkbox change by raw values, resolving keys through the
    /// filter's reverse lookups first.
    ///
    /// `child_value` equal to the other bucket name targets the other
    /// pseudo-child of `parent_value`.
    pub fn toggle_value(
        &mut self,
        group: &str,
        parent_value: &str,
        child_value: Option<&str>,
        checked: bool,
    ) -> CheckTreeResult<CheckedItems> {
        let filter = self
            .nested
            .get(group)
            .ok_or_else(|| CheckTreeError::UnknownGroup {
                group: group.to_string(),
            })?;

        let parent_key = filter.parent_key(parent_value)?.to_string();
        let other_bucket = self.options.other_bucket();

        let (child_key, value) = match child_value {
            None => (None, parent_value.to_string()),
            Some(other) if other == other_bucket && filter.includes_other(parent_value) => {
                (Some(other_bucket.to_string()), parent_value.to_string())
            }
            Some(child_value) => (
                Some(filter.child_key(child_value)?.to_string()),
                child_value.to_string(),
            ),
        };

        self.toggle(group, &parent_key, child_key.as_deref(), &value, checked)
    }

    /// Check or uncheck a standalone checkbox
    pub fn toggle_standalone(&mut self, filter: &StandaloneFilter, checked: bool) -> CheckedItems {
        let current = self.checked_items();
        let set = filter.next_set(current.group(filter.key()), &self.options, checked);
        log::debug!(
            "'{}' standalone '{}' {}",
            filter.key(),
            filter.value(),
            if checked { "checked" } else { "unchecked" }
        );
        let next = current.with_group(filter.key(), set);
        self.commit(next)
    }

    pub fn is_standalone_checked(&self, filter: &StandaloneFilter) -> bool {
        filter.is_checked(self.checked_items().group(filter.key()), &self.options)
    }

    /// Clear every group and report the empty record
    pub fn reset(&mut self) -> CheckedItems {
        log::debug!("reset {} filter group(s)", self.checked_items().len());
        self.commit(CheckedItems::new())
    }

    /// Render-ready nodes of one mounted group
    pub fn view(&self, group: &str) -> CheckTreeResult<FilterView> {
        let filter = self
            .nested
            .get(group)
            .ok_or_else(|| CheckTreeError::UnknownGroup {
                group: group.to_string(),
            })?;
        filter.view(self.checked_items().group(group), &self.options)
    }

    fn commit(&mut self, next: CheckedItems) -> CheckedItems {
        if self.controlled.is_none() {
            self.checked = next.clone();
        }
        self.sink.on_filter_change(&next);
        next
    }
}
