//! Domain layer
//!
//! Pure selection logic with no knowledge of stores, sinks or terminals:
//!
//! - `catalog` - enumerations and memoized reverse lookups
//! - `mapping` - parent → children table
//! - `record` - checked-set records
//! - `reconcile` - toggle rules (collapse / expand)
//! - `resolver` - derived checked / indeterminate flags
//! - `sort` - weighted display ordering
//! - `labels` - readable labels and node ids

pub mod catalog;
pub mod labels;
pub mod mapping;
pub mod reconcile;
pub mod record;
pub mod resolver;
pub mod sort;

pub use catalog::{Enumeration, FilterEnum, LookupCache, ReverseLookup};
pub use labels::{enum_to_readable, Labels};
pub use mapping::Mapping;
pub use reconcile::{apply_toggle, Toggle, ToggleContext, ToggleOutcome};
pub use record::{CheckedItems, CheckedSet};
pub use resolver::{ChildState, NodeStateResolver, ParentState, SelectionState};
pub use sort::SortWeights;
