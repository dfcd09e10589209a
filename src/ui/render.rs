//! Plain-text rendering of filters.
//!
//! This module renders filter views, standalone checkboxes and the legend
//! to strings for terminal output.

use crate::domain::SelectionState;
use crate::filter::{FilterView, StandaloneFilter};

use super::theme::{icon, icons, icons_ascii};

fn state_icon(state: SelectionState, supports_unicode: bool) -> &'static str {
    match state {
        SelectionState::Selected => icon(icons::SELECTED, icons_ascii::SELECTED, supports_unicode),
        SelectionState::Unselected => {
            icon(icons::UNSELECTED, icons_ascii::UNSELECTED, supports_unicode)
        }
        SelectionState::Partial => icon(icons::PARTIAL, icons_ascii::PARTIAL, supports_unicode),
    }
}

/// Render one nested filter: a header line with the group key, then each
/// parent with its children (and other pseudo-child) indented below it.
pub fn render_filter(view: &FilterView, supports_unicode: bool) -> String {
    let mut out = String::new();
    out.push_str(&view.key);
    out.push('\n');

    for parent in &view.parents {
        let total = parent.children.len() + usize::from(parent.other.is_some());
        let checked = parent.children.iter().filter(|c| c.checked).count()
            + usize::from(parent.other.as_ref().is_some_and(|o| o.checked));

        out.push_str(&format!(
            "  {} {} ({}/{})\n",
            state_icon(parent.state().selection(), supports_unicode),
            parent.label,
            checked,
            total
        ));

        for child in parent.children.iter().chain(parent.other.iter()) {
            out.push_str(&format!(
                "    {} {}\n",
                state_icon(child.state().selection(), supports_unicode),
                child.label
            ));
        }
    }

    out
}

/// Render a standalone checkbox as a single line
pub fn render_standalone(filter: &StandaloneFilter, checked: bool, supports_unicode: bool) -> String {
    let state = if checked {
        SelectionState::Selected
    } else {
        SelectionState::Unselected
    };
    format!("{} {}", state_icon(state, supports_unicode), filter.title())
}

/// Render the icon legend
pub fn render_legend(supports_unicode: bool) -> String {
    format!(
        "{} = checked    {} = partial    {} = not checked",
        state_icon(SelectionState::Selected, supports_unicode),
        state_icon(SelectionState::Partial, supports_unicode),
        state_icon(SelectionState::Unselected, supports_unicode),
    )
}
