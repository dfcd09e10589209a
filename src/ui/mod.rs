//! Terminal output
//!
//! - `render` - checkbox trees as text
//! - `output` - definition warnings
//! - `terminal` - capability detection
//! - `theme` - icons

pub mod output;
pub mod render;
pub mod terminal;
pub mod theme;
