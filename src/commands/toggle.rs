//! Toggle command handler
//!
//! Mounts every filter of a definition, applies the requested toggles in
//! order and prints the resulting trees (or NDJSON change events).

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use checktree::{CheckedItems, FilterDefinition, Filters, JsonEventSink, StandaloneFilter};

use super::{load_definition, print_filters};

/// One `group:PARENT[/CHILD]=on|off` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleArg {
    pub group: String,
    pub parent: String,
    pub child: Option<String>,
    pub checked: bool,
}

impl FromStr for ToggleArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, state) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("missing '=on' or '=off' in '{s}'"))?;
        let checked = match state.trim().to_lowercase().as_str() {
            "on" | "true" | "1" => true,
            "off" | "false" | "0" => false,
            other => return Err(format!("invalid state '{other}', expected on or off")),
        };

        let (group, path) = target
            .split_once(':')
            .ok_or_else(|| format!("missing 'group:' prefix in '{s}'"))?;
        let (parent, child) = match path.split_once('/') {
            Some((parent, child)) => (parent, Some(child.to_string())),
            None => (path, None),
        };

        if group.is_empty() || parent.is_empty() || child.as_deref() == Some("") {
            return Err(format!("empty group, parent or child in '{s}'"));
        }

        Ok(Self {
            group: group.to_string(),
            parent: parent.to_string(),
            child,
            checked,
        })
    }
}

pub fn cmd_toggle(
    definition_path: &Path,
    initial: Option<&str>,
    toggles: &[ToggleArg],
    json: bool,
    supports_unicode: bool,
) -> Result<()> {
    let definition = load_definition(definition_path, supports_unicode)?;
    let standalone = definition.standalone_filters();

    let mut store = build_store(&definition, initial, json)?;

    for arg in toggles {
        apply(&mut store, &standalone, arg)
            .with_context(|| format!("toggle {}:{} failed", arg.group, arg.parent))?;
    }

    if json {
        let complete = serde_json::json!({
            "event": "complete",
            "command": "toggle",
            "filters": store.checked_items(),
        });
        println!("{}", complete);
        return Ok(());
    }

    print_filters(&store, &standalone, supports_unicode)
}

fn build_store(definition: &FilterDefinition, initial: Option<&str>, json: bool) -> Result<Filters> {
    let mut store = Filters::new(definition.options.clone())?;
    if let Some(initial) = initial {
        let items = CheckedItems::from_json(initial).context("invalid --initial record")?;
        store = store.with_initial(items);
    }
    if json {
        store = store.with_sink(JsonEventSink::stdout());
    }
    for filter in definition.nested_filters() {
        store.mount(filter);
    }
    Ok(store)
}

fn apply(store: &mut Filters, standalone: &[StandaloneFilter], arg: &ToggleArg) -> Result<()> {
    if store.filter(&arg.group).is_some() {
        store.toggle_value(&arg.group, &arg.parent, arg.child.as_deref(), arg.checked)?;
        return Ok(());
    }

    let lone = standalone
        .iter()
        .find(|f| f.key() == arg.group && f.value() == arg.parent);
    match (lone, &arg.child) {
        (Some(filter), None) => {
            store.toggle_standalone(filter, arg.checked);
            Ok(())
        }
        (Some(_), Some(child)) => bail!("standalone filter '{}' has no child '{child}'", arg.group),
        (None, _) => bail!("no filter group '{}' in the definition", arg.group),
    }
}
