use std::path::Path;

use anyhow::{bail, Result};

use checktree::ui::output::print_config_warnings;
use checktree::ui::theme::{icon, icons, icons_ascii};
use checktree::{FilterDefinition, Filters};

/// Load a definition, mount everything and check each mapping resolves.
pub fn cmd_validate(definition_path: &Path, json: bool, supports_unicode: bool) -> Result<()> {
    let (definition, warnings) = match FilterDefinition::load_with_warnings(definition_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            if json {
                let out = serde_json::json!({
                    "event": "complete",
                    "command": "validate",
                    "valid": false,
                    "error": e.to_string(),
                });
                println!("{}", out);
            }
            return Err(e.into());
        }
    };

    let mut problems = Vec::new();
    let mut store = Filters::new(definition.options.clone())?;
    for filter in definition.nested_filters() {
        for parent in filter.mapping().parents() {
            if let Err(e) = filter.parent_key(parent) {
                problems.push(format!("{}: {}", filter.key(), e));
            }
            for child in filter.children_of(parent) {
                if let Err(e) = filter.child_key(child) {
                    problems.push(format!("{}: {}", filter.key(), e));
                }
            }
        }
        store.mount(filter);
    }

    let groups = store.filters().count();
    let standalone = definition.standalone_filters().len();

    if json {
        let out = serde_json::json!({
            "event": "complete",
            "command": "validate",
            "valid": problems.is_empty(),
            "filters": groups,
            "standalone": standalone,
            "warnings": warnings.iter().map(|w| &w.key).collect::<Vec<_>>(),
            "problems": problems,
        });
        println!("{}", out);
    } else {
        print_config_warnings(definition_path, &warnings, supports_unicode);
        let warn = icon(icons::WARNING, icons_ascii::WARNING, supports_unicode);
        for problem in &problems {
            eprintln!("{warn} {problem}");
        }
        if problems.is_empty() {
            println!(
                "{} valid: {} filter group(s), {} standalone",
                definition_path.display(),
                groups,
                standalone
            );
        }
    }

    if !problems.is_empty() {
        bail!("{} mapping problem(s) in {}", problems.len(), definition_path.display());
    }
    Ok(())
}
