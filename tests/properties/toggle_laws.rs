//! Property tests for the toggle rules.

use std::sync::Arc;

use proptest::prelude::*;

use checktree::{CheckedItems, Enumeration, Filters, Mapping, NestedFilter};

use crate::common::{animals_store, bucket};

const CHILDREN: &[(&str, &str)] = &[("LAB", "DOG"), ("POODLE", "DOG"), ("SIAMESE", "CAT")];
const PARENTS: &[&str] = &["DOG", "CAT"];

#[derive(Debug, Clone, Copy)]
enum Target {
    Child(usize),
    Parent(usize),
    Other(usize),
}

fn target() -> impl Strategy<Value = Target> {
    prop_oneof![
        (0..CHILDREN.len()).prop_map(Target::Child),
        (0..PARENTS.len()).prop_map(Target::Parent),
        (0..PARENTS.len()).prop_map(Target::Other),
    ]
}

fn toggle(store: &mut Filters, target: Target, checked: bool) -> CheckedItems {
    let result = match target {
        Target::Child(i) => {
            let (child, parent) = CHILDREN[i];
            store.toggle_value("animals", parent, Some(child), checked)
        }
        Target::Parent(i) => store.toggle_value("animals", PARENTS[i], None, checked),
        Target::Other(i) => store.toggle_value("animals", PARENTS[i], Some("OTHER"), checked),
    };
    result.unwrap()
}

/// Currently displayed checked flag of the node `target` points at
fn displayed(store: &Filters, target: Target) -> bool {
    let view = store.view("animals").unwrap();
    match target {
        Target::Child(i) => {
            let (child, parent) = CHILDREN[i];
            view.parent(parent).unwrap().child(child).unwrap().checked
        }
        Target::Parent(i) => view.parent(PARENTS[i]).unwrap().checked,
        Target::Other(i) => view.parent(PARENTS[i]).unwrap().other.as_ref().unwrap().checked,
    }
}

fn children_of(parent: &str) -> Vec<&'static str> {
    CHILDREN
        .iter()
        .filter(|(_, p)| *p == parent)
        .map(|(c, _)| *c)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: checking every child collapses into the parent; unchecking
    /// any one of them afterwards relists exactly the others.
    #[test]
    fn property_collapse_expand_inverse(
        order in Just(vec!["A", "B", "C"]).prop_shuffle(),
        unchecked in 0usize..3,
    ) {
        let filter = NestedFilter::builder(
            "letters",
            Arc::new(Enumeration::from_pairs([("P", "P")])),
            Arc::new(Enumeration::from_pairs([("A", "A"), ("B", "B"), ("C", "C")])),
            Mapping::new().with("P", ["A", "B", "C"]),
        )
        .build();
        let mut store = Filters::new(Default::default()).unwrap();
        store.mount(filter);

        let items = order
            .iter()
            .map(|child| store.toggle_value("letters", "P", Some(*child), true).unwrap())
            .last()
            .unwrap();
        prop_assert_eq!(bucket(&items, "letters", "parent"), vec!["P".to_string()]);
        prop_assert!(bucket(&items, "letters", "child").is_empty());

        let removed = order[unchecked];
        let items = store.toggle_value("letters", "P", Some(removed), false).unwrap();
        let mut expected: Vec<String> = ["A", "B", "C"]
            .iter()
            .filter(|c| **c != removed)
            .map(|c| c.to_string())
            .collect();
        expected.sort();
        prop_assert_eq!(bucket(&items, "letters", "child"), expected);
        prop_assert!(bucket(&items, "letters", "parent").is_empty());
    }

    /// PROPERTY: checking something that is already checked changes nothing.
    #[test]
    fn property_check_is_idempotent(
        collapse in any::<bool>(),
        history in proptest::collection::vec((target(), any::<bool>()), 0..12),
        last in target(),
    ) {
        let mut store = animals_store(collapse, true);
        for (t, checked) in history {
            toggle(&mut store, t, checked);
        }

        let once = toggle(&mut store, last, true);
        let twice = toggle(&mut store, last, true);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: a listed parent shows every one of its children checked.
    #[test]
    fn property_parent_implies_children_checked(
        collapse in any::<bool>(),
        history in proptest::collection::vec((target(), any::<bool>()), 0..16),
    ) {
        let mut store = animals_store(collapse, true);
        let mut items = store.checked_items().clone();
        for (t, checked) in history {
            items = toggle(&mut store, t, checked);
        }

        let view = store.view("animals").unwrap();
        for parent in bucket(&items, "animals", "parent") {
            let node = view.parent(&parent).unwrap();
            prop_assert!(node.checked);
            prop_assert!(node.children.iter().all(|c| c.checked));
        }
    }

    /// PROPERTY: the other pseudo-child never touches the parent or child
    /// buckets, and collapsing never touches the other bucket.
    #[test]
    fn property_other_is_independent(
        collapse in any::<bool>(),
        history in proptest::collection::vec((target(), any::<bool>()), 0..12),
        parent in 0..PARENTS.len(),
        checked in any::<bool>(),
    ) {
        let mut store = animals_store(collapse, true);
        let mut before = store.checked_items().clone();
        for (t, c) in history {
            before = toggle(&mut store, t, c);
        }

        let after = toggle(&mut store, Target::Other(parent), checked);
        prop_assert_eq!(bucket(&before, "animals", "parent"), bucket(&after, "animals", "parent"));
        prop_assert_eq!(bucket(&before, "animals", "child"), bucket(&after, "animals", "child"));

        let mut store = animals_store(true, true);
        let before = toggle(&mut store, Target::Child(0), true);
        let after = toggle(&mut store, Target::Child(1), true);
        prop_assert_eq!(bucket(&before, "animals", "OTHER"), bucket(&after, "animals", "OTHER"));
    }

    /// PROPERTY: clicking a node flips exactly its displayed state, and with
    /// collapse on the record stays canonical (no parent listed alongside
    /// its children, no complete child group left uncollapsed).
    #[test]
    fn property_clicks_keep_record_canonical(
        clicks in proptest::collection::vec(target(), 0..24),
    ) {
        let mut store = animals_store(true, true);
        for t in clicks {
            let next = !displayed(&store, t);
            let items = toggle(&mut store, t, next);
            prop_assert_eq!(displayed(&store, t), next);

            let listed_parents = bucket(&items, "animals", "parent");
            let listed_children = bucket(&items, "animals", "child");
            for parent in PARENTS {
                let children = children_of(parent);
                let listed = children
                    .iter()
                    .filter(|c| listed_children.iter().any(|l| l == *c))
                    .count();
                if listed_parents.iter().any(|p| p == parent) {
                    prop_assert_eq!(listed, 0);
                }
                prop_assert!(listed < children.len());
            }
        }
    }

    /// PROPERTY: buckets only ever hold values known to the group.
    #[test]
    fn property_buckets_hold_known_values(
        collapse in any::<bool>(),
        history in proptest::collection::vec((target(), any::<bool>()), 0..16),
    ) {
        let mut store = animals_store(collapse, true);
        let mut items = store.checked_items().clone();
        for (t, checked) in history {
            items = toggle(&mut store, t, checked);
        }

        for value in bucket(&items, "animals", "parent")
            .into_iter()
            .chain(bucket(&items, "animals", "OTHER"))
        {
            prop_assert!(PARENTS.contains(&value.as_str()));
        }
        for value in bucket(&items, "animals", "child") {
            prop_assert!(CHILDREN.iter().any(|(c, _)| *c == value));
        }
    }
}
