//! In-place whole-tree immutability.

use arbor_node::Node;
use tracing::trace;

use crate::visit::Visited;

/// Freeze `value` and every container reachable from it, in place, and
/// return the same handle. This is the only operation in the crate that
/// mutates its input.
///
/// After freezing, mutating accessors on any reached container fail loudly:
/// `insert`/`remove`/`push` panic and the `try_*` variants return
/// `NodeError::Frozen`. Reads are unaffected. A non-container input yields
/// `Node::Absent`. Revisited (cyclic) containers are left as-is, so cyclic
/// trees freeze in bounded time.
pub fn deep_freeze(value: &Node) -> Node {
    if !value.is_container() {
        return Node::Absent;
    }
    let mut visited = Visited::new();
    freeze_node(value, &mut visited);
    value.clone()
}

fn freeze_node(node: &Node, visited: &mut Visited) {
    match node {
        Node::Map(map) => {
            if !visited.enter(map.id()) {
                trace!(id = map.id(), "revisited map already frozen on this walk");
                return;
            }
            map.freeze();
            for (_, value) in map.entries() {
                if value.is_container() {
                    freeze_node(&value, visited);
                }
            }
        }
        Node::List(list) => {
            if !visited.enter(list.id()) {
                return;
            }
            list.freeze();
            for item in list.items() {
                if item.is_container() {
                    freeze_node(&item, visited);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_node::{from_json, MapNode, NodeError};
    use serde_json::json;

    fn n(value: serde_json::Value) -> Node {
        from_json(value)
    }

    #[test]
    fn returns_the_same_handle() {
        let tree = n(json!({"a": 1}));
        let frozen = deep_freeze(&tree);
        assert!(tree.same_value(&frozen));
    }

    #[test]
    fn freezes_nested_containers() {
        let tree = n(json!({"a": {"b": [1]}}));
        deep_freeze(&tree);

        let root = tree.as_map().unwrap();
        assert!(root.is_frozen());
        let inner = root.get("a").unwrap();
        let inner_map = inner.as_map().unwrap();
        assert!(inner_map.is_frozen());
        let list = inner_map.get("b").unwrap();
        assert!(list.as_list().unwrap().is_frozen());

        assert!(matches!(
            root.try_insert("x", Node::Null),
            Err(NodeError::Frozen)
        ));
        assert!(matches!(
            list.as_list().unwrap().try_push(Node::Null),
            Err(NodeError::Frozen)
        ));
    }

    #[test]
    #[should_panic(expected = "insert on frozen container")]
    fn mutation_after_freeze_fails_loudly() {
        let tree = n(json!({"a": 1}));
        deep_freeze(&tree);
        tree.as_map().unwrap().insert("b", Node::Null);
    }

    #[test]
    fn reads_still_work_after_freeze() {
        let tree = n(json!({"a": 1}));
        deep_freeze(&tree);
        assert!(tree.as_map().unwrap().get("a").unwrap().same_value(&Node::from(1i64)));
        assert_eq!(tree.as_map().unwrap().keys(), vec!["a".to_string()]);
    }

    #[test]
    fn non_container_input_yields_absent() {
        assert!(deep_freeze(&Node::from(1i64)).is_absent());
        assert!(deep_freeze(&Node::Null).is_absent());
        assert!(deep_freeze(&Node::Absent).is_absent());
    }

    #[test]
    fn cyclic_tree_freezes_in_bounded_time() {
        let map = MapNode::new();
        map.insert("self", Node::Map(map.clone()));
        let frozen = deep_freeze(&Node::Map(map.clone()));
        assert!(map.is_frozen());
        assert!(frozen.as_map().unwrap().ptr_eq(&map));
    }
}
