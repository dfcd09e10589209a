//! Command handlers for the checktree CLI

pub mod show;
pub mod toggle;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use checktree::ui::output::print_config_warnings;
use checktree::ui::render::{render_filter, render_legend, render_standalone};
use checktree::{FilterDefinition, Filters, StandaloneFilter};

/// Load a definition, printing unknown-key warnings to stderr.
pub(crate) fn load_definition(path: &Path, supports_unicode: bool) -> Result<FilterDefinition> {
    let (definition, warnings) = FilterDefinition::load_with_warnings(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    print_config_warnings(path, &warnings, supports_unicode);
    Ok(definition)
}

/// Print every mounted filter, then the standalone checkboxes and the legend.
pub(crate) fn print_filters(
    store: &Filters,
    standalone: &[StandaloneFilter],
    supports_unicode: bool,
) -> Result<()> {
    for filter in store.filters() {
        let view = store.view(filter.key())?;
        println!("{}", render_filter(&view, supports_unicode));
    }

    for filter in standalone {
        let checked = store.is_standalone_checked(filter);
        println!("{}", render_standalone(filter, checked, supports_unicode));
    }
    if !standalone.is_empty() {
        println!();
    }

    println!("{}", render_legend(supports_unicode));
    Ok(())
}
