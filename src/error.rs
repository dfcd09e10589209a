//! Error types for checktree
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for checktree operations
pub type CheckTreeResult<T> = Result<T, CheckTreeError>;

/// Which enumeration a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Parent,
    Child,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Parent => write!(f, "parent"),
            LookupKind::Child => write!(f, "child"),
        }
    }
}

/// Main error type for checktree operations
#[derive(Error, Debug)]
pub enum CheckTreeError {
    /// A value (or key) has no entry in the enumeration it was looked up in
    #[error("no {kind} key found for value '{value}'")]
    LookupMiss { kind: LookupKind, value: String },

    /// A structural key that is not part of its enumeration
    #[error("unknown {kind} key '{key}'")]
    UnknownKey { kind: LookupKind, key: String },

    /// Options that contradict each other
    #[error("invalid filter configuration: {message}")]
    ConfigurationMisuse { message: String },

    /// Toggle aimed at a group that was never mounted
    #[error("filter group '{group}' is not mounted")]
    UnknownGroup { group: String },

    /// Parent value missing from the group's mapping
    #[error("parent '{value}' has no entry in the mapping of filter group '{group}'")]
    UnknownParent { group: String, value: String },

    /// Child value that is not mapped under the toggled parent
    #[error("child '{child}' is not mapped under parent '{parent}' in filter group '{group}'")]
    UnmappedChild {
        group: String,
        parent: String,
        child: String,
    },

    /// Filter definition file could not be parsed
    #[error("invalid filter definition in {}: {message}", .file.display())]
    InvalidDefinition { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckTreeError {
    pub(crate) fn misuse(message: impl Into<String>) -> Self {
        CheckTreeError::ConfigurationMisuse {
            message: message.into(),
        }
    }
}
