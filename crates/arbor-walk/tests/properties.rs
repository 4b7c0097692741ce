//! Property-based coverage for the algebraic guarantees of the walk
//! operations: pruning idempotence, flatten/unflatten round trips,
//! diff-then-merge recovery, and clone independence.

use arbor_node::{from_json, Node};
use arbor_walk::{
    all_keys, deep_clone, deep_equal, diff, flatten, merge, remove_undefined_values, unflatten,
};
use proptest::prelude::*;
use serde_json::Value;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| serde_json::json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

/// Map-only trees: every container is a non-empty object with dot-free keys.
/// Empty maps are excluded because flatten erases them, and lists because
/// merge concatenates rather than recovers them.
fn tree_value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 16, 3, |inner| {
        prop::collection::vec(("[a-f]{1,3}", inner), 1..4).prop_map(build_object)
    })
}

fn map_root() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-f]{1,3}", tree_value()), 0..4).prop_map(build_object)
}

fn build_object(pairs: Vec<(String, Value)>) -> Value {
    let mut object = serde_json::Map::new();
    for (key, value) in pairs {
        object.insert(key, value);
    }
    Value::Object(object)
}

proptest! {
    #[test]
    fn remove_undefined_is_idempotent(value in map_root()) {
        let tree = from_json(value);
        tree.as_map().unwrap().insert("injected", Node::Absent);
        let once = remove_undefined_values(&tree);
        let twice = remove_undefined_values(&once);
        prop_assert!(deep_equal(&once, &twice));
    }

    #[test]
    fn flatten_unflatten_round_trips(value in map_root()) {
        let tree = from_json(value);
        let rebuilt = unflatten(&flatten(&tree));
        prop_assert!(deep_equal(&rebuilt, &tree));
    }

    #[test]
    fn flatten_keys_match_all_keys(value in map_root()) {
        let tree = from_json(value);
        let flat = flatten(&tree);
        prop_assert_eq!(flat.as_map().unwrap().keys(), all_keys(&tree));
    }

    #[test]
    fn diff_then_merge_recovers_after_state(
        before in map_root(),
        overlay in map_root(),
    ) {
        let before = from_json(before);
        // Additive change set: `after` owns every key `before` owns.
        let after = merge(&before, &from_json(overlay));
        let patch = diff(&before, &after);
        let recovered = merge(&before, &patch);
        prop_assert!(deep_equal(&recovered, &after));
    }

    #[test]
    fn clone_is_equal_and_independent(value in map_root()) {
        let tree = from_json(value.clone());
        let copy = deep_clone(&tree);
        prop_assert!(deep_equal(&copy, &tree));

        copy.as_map().unwrap().insert("probe", Node::from(true));
        prop_assert!(!tree.as_map().unwrap().contains_key("probe"));
        prop_assert!(deep_equal(&tree, &from_json(value)));
    }
}
