//! Single-level value transform over a flat map.

use arbor_node::{MapNode, Node};

/// Apply `f` to every top-level value of a map, producing a new map with the
/// same keys in the same order. No recursion: nested containers are handed
/// to `f` as-is. A non-map input yields `Node::Absent`.
pub fn map_values(value: &Node, mut f: impl FnMut(&Node) -> Node) -> Node {
    let Node::Map(map) = value else {
        return Node::Absent;
    };
    let out = map
        .entries()
        .into_iter()
        .map(|(key, value)| {
            let mapped = f(&value);
            (key, mapped)
        })
        .collect();
    Node::Map(MapNode::from_entries(out))
}
