//! Scenario: a user narrows an animal list breed by breed.

use checktree::{CheckTreeError, SelectionState};

use crate::common::{animals_store, bucket, Recorder, DOG_CHILDREN};

#[test]
fn scenario_collapse_then_expand() {
    let recorder = Recorder::default();
    let mut store = animals_store(true, false).with_sink(recorder.clone());

    let items = store.toggle_value("animals", "DOG", Some("LAB"), true).unwrap();
    assert_eq!(bucket(&items, "animals", "child"), vec!["LAB"]);
    assert!(bucket(&items, "animals", "parent").is_empty());

    let view = store.view("animals").unwrap();
    assert_eq!(view.parent("DOG").unwrap().state().selection(), SelectionState::Partial);

    let items = store.toggle_value("animals", "DOG", Some("POODLE"), true).unwrap();
    assert!(bucket(&items, "animals", "child").is_empty());
    assert_eq!(bucket(&items, "animals", "parent"), vec!["DOG"]);

    let view = store.view("animals").unwrap();
    let dog = view.parent("DOG").unwrap();
    assert_eq!(dog.state().selection(), SelectionState::Selected);
    assert!(DOG_CHILDREN.iter().all(|c| dog.child(c).unwrap().checked));

    let items = store.toggle_value("animals", "DOG", Some("LAB"), false).unwrap();
    assert_eq!(bucket(&items, "animals", "child"), vec!["POODLE"]);
    assert!(bucket(&items, "animals", "parent").is_empty());

    assert_eq!(recorder.events().len(), 3);
    assert_eq!(recorder.last().as_ref(), Some(store.checked_items()));
}

#[test]
fn scenario_parent_click_clears_partial_selection() {
    let mut store = animals_store(true, false);

    store.toggle_value("animals", "DOG", Some("LAB"), true).unwrap();
    let items = store.toggle_value("animals", "DOG", None, true).unwrap();
    assert_eq!(bucket(&items, "animals", "parent"), vec!["DOG"]);
    assert!(bucket(&items, "animals", "child").is_empty());

    let items = store.toggle_value("animals", "DOG", None, false).unwrap();
    assert!(bucket(&items, "animals", "parent").is_empty());
    assert!(bucket(&items, "animals", "child").is_empty());
}

#[test]
fn scenario_other_counts_toward_completeness() {
    let mut store = animals_store(true, true);

    store.toggle_value("animals", "DOG", Some("LAB"), true).unwrap();
    let items = store.toggle_value("animals", "DOG", Some("OTHER"), true).unwrap();
    assert_eq!(bucket(&items, "animals", "OTHER"), vec!["DOG"]);
    assert_eq!(bucket(&items, "animals", "child"), vec!["LAB"]);

    let view = store.view("animals").unwrap();
    assert_eq!(view.parent("DOG").unwrap().state().selection(), SelectionState::Partial);

    let items = store.toggle_value("animals", "DOG", Some("POODLE"), true).unwrap();
    assert_eq!(bucket(&items, "animals", "parent"), vec!["DOG"]);
    assert_eq!(bucket(&items, "animals", "OTHER"), vec!["DOG"]);

    let view = store.view("animals").unwrap();
    let dog = view.parent("DOG").unwrap();
    assert_eq!(dog.state().selection(), SelectionState::Selected);
    assert!(dog.other.as_ref().unwrap().checked);
}

#[test]
fn scenario_unknown_breed_leaves_record_untouched() {
    let recorder = Recorder::default();
    let mut store = animals_store(true, false).with_sink(recorder.clone());
    store.toggle_value("animals", "DOG", Some("LAB"), true).unwrap();
    let before = store.checked_items().clone();

    let err = store
        .toggle_value("animals", "DOG", Some("BEAGLE"), true)
        .unwrap_err();

    assert!(matches!(err, CheckTreeError::LookupMiss { .. }));
    assert_eq!(store.checked_items(), &before);
    assert_eq!(recorder.events().len(), 1);
}

#[test]
fn scenario_collapse_disabled_lists_every_child() {
    let mut store = animals_store(false, false);

    store.toggle_value("animals", "DOG", Some("LAB"), true).unwrap();
    let items = store.toggle_value("animals", "DOG", Some("POODLE"), true).unwrap();

    assert_eq!(bucket(&items, "animals", "child"), vec!["LAB", "POODLE"]);
    assert!(bucket(&items, "animals", "parent").is_empty());
    assert!(store.view("animals").unwrap().parent("DOG").unwrap().checked);
}
