//! Dot-joined leaf path enumeration.

use arbor_node::{MapNode, Node};

use crate::visit::Visited;

/// Enumerate every leaf path of a map tree, dot-joined, in insertion order.
///
/// Map values that are themselves maps recurse with a `parent.key` prefix.
/// List values are leaves in their own right: their path is pushed once and
/// their elements are not descended into. Scalars, `Null`, and stored
/// `Absent` values push their path. An empty nested map contributes nothing,
/// as does a revisited (cyclic) container. A non-map root yields an empty
/// sequence.
pub fn all_keys(value: &Node) -> Vec<String> {
    let Node::Map(map) = value else {
        return Vec::new();
    };
    let mut visited = Visited::new();
    let mut paths = Vec::new();
    collect(map, String::new(), &mut visited, &mut paths);
    paths
}

fn collect(map: &MapNode, prefix: String, visited: &mut Visited, paths: &mut Vec<String>) {
    if !visited.enter(map.id()) {
        return;
    }
    for (key, value) in map.entries() {
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Node::Map(inner) => collect(&inner, path, visited, paths),
            _ => paths.push(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_node::{from_json, MapNode};
    use serde_json::json;

    fn keys_of(value: serde_json::Value) -> Vec<String> {
        all_keys(&from_json(value))
    }

    #[test]
    fn nested_maps_become_dotted_paths() {
        assert_eq!(
            keys_of(json!({"name": "John", "address": {"city": "NY", "geo": {"lat": 1}}})),
            vec!["name", "address.city", "address.geo.lat"]
        );
    }

    #[test]
    fn lists_are_leaves() {
        assert_eq!(
            keys_of(json!({"tags": ["a", "b"], "nested": {"xs": [1]}})),
            vec!["tags", "nested.xs"]
        );
    }

    #[test]
    fn null_values_are_leaves() {
        assert_eq!(keys_of(json!({"a": null})), vec!["a"]);
    }

    #[test]
    fn empty_nested_map_contributes_nothing() {
        assert_eq!(keys_of(json!({"a": {}, "b": 1})), vec!["b"]);
    }

    #[test]
    fn stored_absent_is_a_leaf() {
        let node = from_json(json!({"a": 1}));
        node.as_map().unwrap().insert("gone", Node::Absent);
        assert_eq!(all_keys(&node), vec!["a", "gone"]);
    }

    #[test]
    fn non_map_root_yields_nothing() {
        assert!(keys_of(json!([1, 2])).is_empty());
        assert!(keys_of(json!(42)).is_empty());
        assert!(all_keys(&Node::Absent).is_empty());
    }

    #[test]
    fn cyclic_reference_contributes_nothing_further() {
        let map = MapNode::new();
        map.insert("self", Node::Map(map.clone()));
        map.insert("v", Node::from(1i64));
        assert_eq!(all_keys(&Node::Map(map)), vec!["v"]);
    }
}
