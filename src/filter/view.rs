//! Render-ready snapshot of a nested filter
//!
//! Everything a view layer needs to draw one filter: ordered nodes, ids,
//! labels and the derived display flags.

use serde::Serialize;

use crate::domain::{ChildState, ParentState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    pub key: String,
    pub parents: Vec<ParentNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentNode {
    pub id: String,
    pub key: String,
    pub value: String,
    pub label: String,
    pub checked: bool,
    pub indeterminate: bool,
    pub children: Vec<ChildNode>,
    /// Other pseudo-child, when enabled for this parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<ChildNode>,
}

impl ParentNode {
    pub fn state(&self) -> ParentState {
        ParentState {
            checked: self.checked,
            indeterminate: self.indeterminate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildNode {
    pub id: String,
    pub key: String,
    pub value: String,
    pub label: String,
    pub checked: bool,
}

impl ChildNode {
    pub fn state(&self) -> ChildState {
        ChildState {
            checked: self.checked,
        }
    }
}

impl FilterView {
    pub fn parent(&self, value: &str) -> Option<&ParentNode> {
        self.parents.iter().find(|p| p.value == value)
    }
}

impl ParentNode {
    pub fn child(&self, value: &str) -> Option<&ChildNode> {
        self.children.iter().find(|c| c.value == value)
    }
}
