//! Scenario: the other bucket is renamed to MISC in the options.

use checktree::{FilterOptions, Filters, SelectionState};

use crate::common::{animals_filter, bucket};

fn misc_store() -> Filters {
    let options = FilterOptions {
        other_rename: Some("MISC".to_string()),
        ..FilterOptions::default()
    };
    let mut store = Filters::new(options).unwrap();
    store.mount(animals_filter(true));
    store
}

#[test]
fn scenario_renamed_other_round_trip() {
    let mut store = misc_store();

    let items = store.toggle_value("animals", "DOG", Some("MISC"), true).unwrap();
    assert_eq!(bucket(&items, "animals", "MISC"), vec!["DOG"]);
    assert!(items.group("animals").unwrap().bucket("OTHER").is_none());
    assert!(bucket(&items, "animals", "child").is_empty());

    let view = store.view("animals").unwrap();
    let dog = view.parent("DOG").unwrap();
    let other = dog.other.as_ref().unwrap();
    assert!(other.checked);
    assert_eq!(other.key, "MISC");
    assert_eq!(other.label, "MISC");
    assert_eq!(other.id, "animals-animals-parent-DOG-child-OTHER");
    assert_eq!(dog.state().selection(), SelectionState::Partial);

    let items = store.toggle_value("animals", "DOG", Some("MISC"), false).unwrap();
    assert!(bucket(&items, "animals", "MISC").is_empty());

    let view = store.view("animals").unwrap();
    let dog = view.parent("DOG").unwrap();
    assert!(!dog.other.as_ref().unwrap().checked);
    assert_eq!(dog.state().selection(), SelectionState::Unselected);
}

#[test]
fn scenario_default_other_key_is_not_accepted_after_rename() {
    let mut store = misc_store();

    assert!(store.toggle_value("animals", "DOG", Some("OTHER"), true).is_err());
    assert!(bucket(store.checked_items(), "animals", "MISC").is_empty());
}
