//! checktree - hierarchical checkbox selection state
//!
//! checktree keeps the checked state of two-level parent/child filters
//! (plus an optional "other" pseudo-child per parent) as immutable records.
//! Checking every child of a parent collapses them into the parent; unchecking
//! one child of a checked parent expands it back into its remaining siblings.

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod ui;

// Re-exports for convenience
pub use config::{ConfigWarning, FilterDefinition, FilterOptions, IncludeOther};
pub use domain::{
    CheckedItems, CheckedSet, Enumeration, FilterEnum, Labels, LookupCache, Mapping,
    SelectionState, SortWeights, ToggleOutcome,
};
pub use error::{CheckTreeError, CheckTreeResult};
pub use filter::{
    FilterChangeSink, FilterView, Filters, JsonEventSink, NestedFilter, NoopSink, StandaloneFilter,
};
