//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use checktree::{
    CheckedItems, Enumeration, FilterEnum, FilterOptions, Filters, Mapping, NestedFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animal {
    Dog,
    Cat,
}

impl FilterEnum for Animal {
    const ALL: &'static [Self] = &[Animal::Dog, Animal::Cat];

    fn key(self) -> &'static str {
        match self {
            Animal::Dog => "DOG",
            Animal::Cat => "CAT",
        }
    }

    fn value(self) -> &'static str {
        self.key()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breed {
    Lab,
    Poodle,
    Siamese,
}

impl FilterEnum for Breed {
    const ALL: &'static [Self] = &[Breed::Lab, Breed::Poodle, Breed::Siamese];

    fn key(self) -> &'static str {
        match self {
            Breed::Lab => "LAB",
            Breed::Poodle => "POODLE",
            Breed::Siamese => "SIAMESE",
        }
    }

    fn value(self) -> &'static str {
        self.key()
    }
}

pub const DOG_CHILDREN: &[&str] = &["LAB", "POODLE"];

/// DOG → [LAB, POODLE], CAT → [SIAMESE]
pub fn animals_filter(include_other: bool) -> NestedFilter {
    let mapping = Mapping::typed(&[
        (Animal::Dog, &[Breed::Lab, Breed::Poodle][..]),
        (Animal::Cat, &[Breed::Siamese][..]),
    ]);
    NestedFilter::builder(
        "animals",
        Arc::new(Enumeration::of::<Animal>()),
        Arc::new(Enumeration::of::<Breed>()),
        mapping,
    )
    .include_other(include_other)
    .build()
}

pub fn options(collapse: bool) -> FilterOptions {
    FilterOptions {
        replace_children_with_parent_on_all_checked: collapse,
        ..Default::default()
    }
}

/// Uncontrolled store with the animals group mounted
pub fn animals_store(collapse: bool, include_other: bool) -> Filters {
    let mut store = Filters::new(options(collapse)).unwrap();
    store.mount(animals_filter(include_other));
    store
}

/// Records every emitted change
#[derive(Clone, Default)]
pub struct Recorder(pub Arc<Mutex<Vec<CheckedItems>>>);

impl Recorder {
    pub fn events(&self) -> Vec<CheckedItems> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<CheckedItems> {
        self.0.lock().unwrap().last().cloned()
    }
}

impl checktree::FilterChangeSink for Recorder {
    fn on_filter_change(&self, items: &CheckedItems) {
        self.0.lock().unwrap().push(items.clone());
    }
}

/// Sorted values of one bucket of one group
pub fn bucket(items: &CheckedItems, group: &str, bucket: &str) -> Vec<String> {
    items
        .group(group)
        .and_then(|set| set.bucket(bucket))
        .map(|values| values.iter().cloned().collect())
        .unwrap_or_default()
}

pub const ANIMALS_TOML: &str = r#"
[options]
replace_children_with_parent_on_all_checked = true

[[filter]]
key = "animals"
parents = { DOG = "DOG", CAT = "CAT" }
children = { LAB = "LAB", POODLE = "POODLE", SIAMESE = "SIAMESE" }
mapping = { DOG = ["LAB", "POODLE"], CAT = ["SIAMESE"] }
labels = { LAB = "Labrador" }
include_other = { DOG = true }

[[standalone]]
key = "flags"
value = "FAVOURITE"
title = "Favourites"
"#;
