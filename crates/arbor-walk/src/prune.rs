//! Bottom-up pruning: remove empty branches, undefined values, or named keys.
//!
//! All three operations resolve children before the parent decides its own
//! survival, rebuild fresh containers, and treat a revisited (cyclic)
//! container as an empty contribution.

use arbor_node::{ListNode, MapNode, Node};

use crate::visit::Visited;

/// Remove every map that, after recursive pruning, owns no entries.
///
/// A map pruned to empty collapses to `Node::Absent`, which removes its key
/// from the parent entirely (an empty root map yields `Absent`). Lists are
/// never collapsed, even when empty: their elements are pruned recursively
/// and elements that collapsed are filtered out. Scalars, `Null`, and stored
/// `Absent` values pass through unchanged.
pub fn remove_empty_containers(value: &Node) -> Node {
    let mut visited = Visited::new();
    prune_empty(value, &mut visited)
}

fn prune_empty(node: &Node, visited: &mut Visited) -> Node {
    match node {
        Node::Map(map) => {
            if !visited.enter(map.id()) {
                return Node::Absent;
            }
            let mut out: Vec<(String, Node)> = Vec::new();
            for (key, value) in map.entries() {
                let was_map = matches!(value, Node::Map(_));
                let pruned = prune_empty(&value, visited);
                // Only a map that pruned away is dropped; a stored Absent
                // value survives this operation.
                if was_map && pruned.is_absent() {
                    continue;
                }
                out.push((key, pruned));
            }
            if out.is_empty() {
                Node::Absent
            } else {
                Node::Map(MapNode::from_entries(out))
            }
        }
        Node::List(list) => {
            if !visited.enter(list.id()) {
                return Node::list();
            }
            let mut items = Vec::new();
            for item in list.items() {
                let was_map = matches!(item, Node::Map(_));
                let pruned = prune_empty(&item, visited);
                if was_map && pruned.is_absent() {
                    continue;
                }
                items.push(pruned);
            }
            Node::List(ListNode::from_items(items))
        }
        other => other.clone(),
    }
}

/// Drop every map entry and list element whose value is exactly
/// `Node::Absent`. `Null` is retained, and containers that end up empty are
/// kept rather than collapsed.
pub fn remove_undefined_values(value: &Node) -> Node {
    let mut visited = Visited::new();
    drop_undefined(value, &mut visited)
}

fn drop_undefined(node: &Node, visited: &mut Visited) -> Node {
    match node {
        Node::Map(map) => {
            if !visited.enter(map.id()) {
                return Node::map();
            }
            let out = map
                .entries()
                .into_iter()
                .filter(|(_, value)| !value.is_absent())
                .map(|(key, value)| (key, drop_undefined(&value, visited)))
                .collect();
            Node::Map(MapNode::from_entries(out))
        }
        Node::List(list) => {
            if !visited.enter(list.id()) {
                return Node::list();
            }
            let items = list
                .items()
                .into_iter()
                .filter(|item| !item.is_absent())
                .map(|item| drop_undefined(&item, visited))
                .collect();
            Node::List(ListNode::from_items(items))
        }
        other => other.clone(),
    }
}

/// Drop every map key whose name appears in `names`, at every nesting level,
/// regardless of value. Lists are rebuilt element-wise.
pub fn remove_named_keys(value: &Node, names: &[&str]) -> Node {
    let mut visited = Visited::new();
    drop_named(value, names, &mut visited)
}

fn drop_named(node: &Node, names: &[&str], visited: &mut Visited) -> Node {
    match node {
        Node::Map(map) => {
            if !visited.enter(map.id()) {
                return Node::map();
            }
            let out = map
                .entries()
                .into_iter()
                .filter(|(key, _)| !names.contains(&key.as_str()))
                .map(|(key, value)| (key, drop_named(&value, names, visited)))
                .collect();
            Node::Map(MapNode::from_entries(out))
        }
        Node::List(list) => {
            if !visited.enter(list.id()) {
                return Node::list();
            }
            let items = list
                .items()
                .into_iter()
                .map(|item| drop_named(&item, names, visited))
                .collect();
            Node::List(ListNode::from_items(items))
        }
        other => other.clone(),
    }
}
