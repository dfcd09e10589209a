//! Filters
//!
//! # Module Structure
//!
//! - `nested` - parent/child filter: toggles and views for one group
//! - `standalone` - single checkbox filter
//! - `store` - `Filters`, the selection store over every group
//! - `events` - change sinks notified after each mutation
//! - `view` - render-ready node snapshots

mod events;
mod nested;
mod standalone;
mod store;
mod view;

pub use events::{FilterChangeSink, JsonEventSink, NoopSink};
pub use nested::{NestedFilter, NestedFilterBuilder};
pub use standalone::StandaloneFilter;
pub use store::Filters;
pub use view::{ChildNode, FilterView, ParentNode};
