//! Scenario: filters loaded from a definition file drive a store.

use std::fs;

use checktree::{FilterDefinition, Filters};
use tempfile::tempdir;

use crate::common::{bucket, ANIMALS_TOML};

#[test]
fn scenario_definition_file_drives_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("filters.toml");
    fs::write(&path, ANIMALS_TOML).unwrap();

    let (definition, warnings) = FilterDefinition::load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty());

    let mut store = Filters::new(definition.options.clone()).unwrap();
    for filter in definition.nested_filters() {
        store.mount(filter);
    }
    let standalone = definition.standalone_filters();

    store.toggle_value("animals", "DOG", Some("LAB"), true).unwrap();
    store.toggle_value("animals", "DOG", Some("POODLE"), true).unwrap();
    let items = store.toggle_standalone(&standalone[0], true);

    assert_eq!(bucket(&items, "animals", "parent"), vec!["DOG"]);
    assert_eq!(bucket(&items, "flags", "parent"), vec!["FAVOURITE"]);

    let view = store.view("animals").unwrap();
    let dog = view.parent("DOG").unwrap();
    assert_eq!(dog.child("LAB").unwrap().label, "Labrador");
    assert!(dog.other.is_some());
    assert!(view.parent("CAT").unwrap().other.is_none());
}
