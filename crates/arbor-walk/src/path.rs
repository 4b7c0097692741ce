//! Path accessors: dotted-path lookups without a full traversal.

use arbor_node::Node;

/// Resolve a dotted path against a tree, returning `Node::Absent` the moment
/// any intermediate value is not indexable (including a non-container root).
///
/// Maps index by key; lists index by numeric segment. An empty path yields
/// `Absent`. A stored `Absent` value resolves to `Absent`, which is
/// indistinguishable from a missing key here; use [`is_property_defined`]
/// when that distinction matters.
pub fn get_nested_value(root: &Node, path: &str) -> Node {
    if path.is_empty() {
        return Node::Absent;
    }
    let mut current = root.clone();
    for segment in path.split('.') {
        match step(&current, segment) {
            Some(next) => current = next,
            None => return Node::Absent,
        }
    }
    current
}

/// Returns `true` only if every path segment resolves to an owned key or
/// index. The final value itself counts as defined even when it is the
/// `Absent` sentinel. An empty path is `false`.
pub fn is_property_defined(root: &Node, path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let mut current = root.clone();
    for segment in path.split('.') {
        match step(&current, segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

fn step(current: &Node, segment: &str) -> Option<Node> {
    match current {
        Node::Map(map) => map.get(segment),
        Node::List(list) => segment.parse::<usize>().ok().and_then(|index| list.get(index)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_node::from_json;
    use serde_json::json;

    fn n(value: serde_json::Value) -> Node {
        from_json(value)
    }

    #[test]
    fn resolves_nested_map_paths() {
        let tree = n(json!({"user": {"profile": {"name": "Alice"}}}));
        let value = get_nested_value(&tree, "user.profile.name");
        assert!(value.same_value(&Node::from("Alice")));
    }

    #[test]
    fn missing_leaf_is_absent() {
        let tree = n(json!({"user": {"profile": {"name": "Alice"}}}));
        assert!(get_nested_value(&tree, "user.profile.email").is_absent());
    }

    #[test]
    fn scalar_intermediate_short_circuits() {
        let tree = n(json!({"a": 1}));
        assert!(get_nested_value(&tree, "a.b.c").is_absent());
    }

    #[test]
    fn non_container_root_is_absent() {
        assert!(get_nested_value(&Node::from(1i64), "a").is_absent());
        assert!(get_nested_value(&Node::Null, "a").is_absent());
    }

    #[test]
    fn empty_path_is_absent_and_undefined() {
        let tree = n(json!({"a": 1}));
        assert!(get_nested_value(&tree, "").is_absent());
        assert!(!is_property_defined(&tree, ""));
    }

    #[test]
    fn list_segments_index_numerically() {
        let tree = n(json!({"xs": [{"v": 10}, {"v": 20}]}));
        assert!(get_nested_value(&tree, "xs.1.v").same_value(&Node::from(20i64)));
        assert!(get_nested_value(&tree, "xs.2.v").is_absent());
        assert!(get_nested_value(&tree, "xs.nope").is_absent());
    }

    #[test]
    fn defined_follows_ownership_not_value() {
        let tree = n(json!({"a": {"b": null}}));
        assert!(is_property_defined(&tree, "a.b"));
        assert!(is_property_defined(&tree, "a"));
        assert!(!is_property_defined(&tree, "a.c"));
        assert!(!is_property_defined(&tree, "z"));
    }

    #[test]
    fn stored_absent_counts_as_defined() {
        let tree = n(json!({"a": {}}));
        tree.as_map()
            .unwrap()
            .get("a")
            .unwrap()
            .as_map()
            .unwrap()
            .insert("u", Node::Absent);
        assert!(is_property_defined(&tree, "a.u"));
        // The accessor cannot tell a stored Absent from a missing key.
        assert!(get_nested_value(&tree, "a.u").is_absent());
    }
}
