//! Flatten a tree into a single-level dotted-key map, and back.

use arbor_node::{MapNode, Node};

use crate::visit::Visited;

/// Collapse a tree into a single-level map keyed by dot-joined paths.
///
/// Map nesting becomes a path prefix. A list value emits one entry per
/// element keyed `prefix.index`, with element sub-containers flattened the
/// same way. Empty containers contribute nothing, as do revisited (cyclic)
/// containers. A non-container root yields `Node::Absent`.
///
/// Keys that themselves contain `.` do not round-trip through
/// [`unflatten`]; that limitation is inherent to the joined representation.
pub fn flatten(tree: &Node) -> Node {
    if !tree.is_container() {
        return Node::Absent;
    }
    let mut visited = Visited::new();
    let mut out: Vec<(String, Node)> = Vec::new();
    flatten_into(tree, String::new(), &mut visited, &mut out);
    Node::Map(MapNode::from_entries(out))
}

fn flatten_into(node: &Node, prefix: String, visited: &mut Visited, out: &mut Vec<(String, Node)>) {
    match node {
        Node::Map(map) => {
            if !visited.enter(map.id()) {
                return;
            }
            for (key, value) in map.entries() {
                flatten_into(&value, join(&prefix, &key), visited, out);
            }
        }
        Node::List(list) => {
            if !visited.enter(list.id()) {
                return;
            }
            for (index, item) in list.items().iter().enumerate() {
                flatten_into(item, join(&prefix, &index.to_string()), visited, out);
            }
        }
        leaf => out.push((prefix, leaf.clone())),
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Rebuild a tree from a single-level dotted-key map.
///
/// Each key is split on `.` and intermediate maps are created for every
/// segment except the last. When two keys disagree about whether an
/// intermediate segment is a leaf or a branch, the later-processed key wins
/// on the shared node (last-write-wins, no diagnostic). Numeric segments
/// become map keys, not list indices. A non-map input yields `Node::Absent`.
pub fn unflatten(flat: &Node) -> Node {
    let Node::Map(map) = flat else {
        return Node::Absent;
    };
    let mut root: Vec<(String, Build)> = Vec::new();
    for (key, value) in map.entries() {
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut root, &segments, value);
    }
    Node::Map(materialize(root))
}

enum Build {
    Leaf(Node),
    Branch(Vec<(String, Build)>),
}

fn insert_path(branch: &mut Vec<(String, Build)>, segments: &[&str], value: Node) {
    match segments {
        [] => {}
        [last] => {
            set_slot(branch, last, Build::Leaf(value));
        }
        [head, rest @ ..] => {
            let index = match branch.iter().position(|(key, _)| key.as_str() == *head) {
                Some(index) => index,
                None => {
                    branch.push((head.to_string(), Build::Branch(Vec::new())));
                    branch.len() - 1
                }
            };
            let slot = &mut branch[index].1;
            // A later key re-opening a leaf as a branch overwrites it.
            if let Build::Leaf(_) = slot {
                *slot = Build::Branch(Vec::new());
            }
            if let Build::Branch(children) = slot {
                insert_path(children, rest, value);
            }
        }
    }
}

fn set_slot(branch: &mut Vec<(String, Build)>, key: &str, value: Build) {
    match branch.iter_mut().find(|(k, _)| k.as_str() == key) {
        Some(slot) => slot.1 = value,
        None => branch.push((key.to_string(), value)),
    }
}

fn materialize(entries: Vec<(String, Build)>) -> MapNode {
    MapNode::from_entries(
        entries
            .into_iter()
            .map(|(key, build)| {
                let node = match build {
                    Build::Leaf(node) => node,
                    Build::Branch(children) => Node::Map(materialize(children)),
                };
                (key, node)
            })
            .collect(),
    )
}
