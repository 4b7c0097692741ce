//! Deep clone with cycle re-linking.

use arbor_node::{ListNode, MapNode, Node};
use tracing::trace;

use crate::visit::CloneMap;

/// Produce a fully independent deep copy of `value`.
///
/// Every container in the output is a new allocation; every scalar
/// (including opaque values) is carried over by identity. Cyclic input
/// produces equally cyclic output: each output container is registered in
/// the per-call clone map *before* its children are descended, so a
/// self-referencing container clones into a container that references its
/// own clone, never the original.
pub fn deep_clone(value: &Node) -> Node {
    let mut clones = CloneMap::new();
    clone_node(value, &mut clones)
}

fn clone_node(node: &Node, clones: &mut CloneMap) -> Node {
    match node {
        Node::Map(map) => {
            if let Some(existing) = clones.get(map.id()) {
                trace!(id = map.id(), "re-linking repeated map reference");
                return existing;
            }
            let out = MapNode::new();
            clones.register(map.id(), Node::Map(out.clone()));
            for (key, value) in map.entries() {
                out.insert(key, clone_node(&value, clones));
            }
            Node::Map(out)
        }
        Node::List(list) => {
            if let Some(existing) = clones.get(list.id()) {
                return existing;
            }
            let out = ListNode::new();
            clones.register(list.id(), Node::List(out.clone()));
            for item in list.items() {
                out.push(clone_node(&item, clones));
            }
            Node::List(out)
        }
        scalar => scalar.clone(),
    }
}
