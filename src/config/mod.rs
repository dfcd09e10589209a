//! Configuration module for checktree
//!
//! Options resolve in this order:
//! 1. Environment variables (CHECKTREE_*)
//! 2. The `[options]` table of a definition file
//! 3. Built-in defaults

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    BucketNames, FilterDefinition, FilterOptions, IncludeOther, NestedFilterDef, StandaloneDef,
    OTHER_DEFAULT, OTHER_LABEL_DEFAULT,
};
