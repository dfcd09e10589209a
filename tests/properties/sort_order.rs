//! Property tests for display ordering.

use proptest::prelude::*;

use checktree::domain::sort::ordered;
use checktree::SortWeights;

#[test]
fn weight_table_orders_ascending() {
    let weights: SortWeights = [("a", 2), ("b", 1), ("c", 3)].into_iter().collect();
    assert_eq!(ordered(["a", "b", "c"], Some(&weights)), vec!["b", "a", "c"]);
}

#[test]
fn missing_weights_sort_before_positive_weights() {
    let weights: SortWeights = [("a", 5)].into_iter().collect();
    assert_eq!(ordered(["a", "z"], Some(&weights)), vec!["z", "a"]);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ordering is a permutation with non-decreasing weights, and
    /// the same input always yields the same output.
    #[test]
    fn property_weighted_order_is_deterministic(
        table in proptest::collection::hash_map("[a-e]{1,2}", -3i64..4, 0..6),
        values in proptest::collection::hash_set("[a-e]{1,2}", 0..8),
    ) {
        let values: Vec<String> = values.into_iter().collect();
        let weights: SortWeights = table.clone().into_iter().collect();

        let first = ordered(values.iter().map(String::as_str), Some(&weights));
        let second = ordered(values.iter().map(String::as_str), Some(&weights));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), values.len());

        let weight = |v: &str| table.get(v).copied().unwrap_or(0);
        for pair in first.windows(2) {
            prop_assert!(weight(pair[0]) <= weight(pair[1]));
        }
    }

    /// PROPERTY: without weights the order is lexicographic.
    #[test]
    fn property_unweighted_order_is_lexicographic(
        values in proptest::collection::vec("[A-Z]{1,6}", 0..10),
    ) {
        let mut expected: Vec<&str> = values.iter().map(String::as_str).collect();
        expected.sort();
        prop_assert_eq!(ordered(values.iter().map(String::as_str), None), expected);
    }
}

