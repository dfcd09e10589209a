use std::path::Path;

use anyhow::Result;

use checktree::Filters;

use super::{load_definition, print_filters};

pub fn cmd_show(definition_path: &Path, json: bool, supports_unicode: bool) -> Result<()> {
    let definition = load_definition(definition_path, supports_unicode)?;
    let mut store = Filters::new(definition.options.clone())?;
    for filter in definition.nested_filters() {
        store.mount(filter);
    }
    let standalone = definition.standalone_filters();

    if json {
        let views = store
            .filters()
            .map(|f| store.view(f.key()))
            .collect::<Result<Vec<_>, _>>()?;
        let out = serde_json::json!({
            "event": "complete",
            "command": "show",
            "filters": views,
            "checked": store.checked_items(),
        });
        println!("{}", out);
        return Ok(());
    }

    print_filters(&store, &standalone, supports_unicode)
}
