//! Patch-like difference between two trees.
//!
//! The result mirrors the shape of the `after` input and contains only keys
//! whose value changed, was added, or was removed. Removed map keys are
//! represented by an explicit `Node::Absent` entry, not by key deletion, so
//! a diff can be applied as a patch.

use arbor_node::{ListNode, MapNode, Node};
use tracing::trace;

use crate::visit::PairVisited;

/// Compute the difference between `before` and `after`.
///
/// - Both roots `Null`/`Absent`: `Node::Absent`.
/// - Exactly one root `Null`/`Absent`: a shallow copy of the other root.
/// - Map vs map: per key -- present only in `after` yields the raw `after`
///   value; present only in `before` yields an `Absent` marker; identical
///   (`===`) values are omitted; same-kind container pairs recurse, included
///   only when the nested diff is non-empty; anything else yields the raw
///   `after` value.
/// - List vs list of equal length: element-wise, with unchanged slots held
///   as `Absent`; a fully unchanged list collapses to an empty one. Unequal
///   lengths replace the whole branch with a shallow copy of `after`.
/// - Revisited container pairs contribute an empty container (treated as
///   unchanged), so cyclic inputs terminate.
pub fn diff(before: &Node, after: &Node) -> Node {
    let mut visited = PairVisited::new();
    let before_missing = matches!(before, Node::Absent | Node::Null);
    let after_missing = matches!(after, Node::Absent | Node::Null);
    match (before_missing, after_missing) {
        (true, true) => Node::Absent,
        (true, false) => shallow_copy(after),
        (false, true) => shallow_copy(before),
        (false, false) => diff_nodes(before, after, &mut visited),
    }
}

fn diff_nodes(before: &Node, after: &Node, visited: &mut PairVisited) -> Node {
    match (before, after) {
        (Node::Map(b), Node::Map(a)) => {
            if !visited.enter(b.id(), a.id()) {
                trace!(before = b.id(), after = a.id(), "revisited map pair, treating as unchanged");
                return Node::map();
            }
            Node::Map(diff_maps(b, a, visited))
        }
        (Node::List(b), Node::List(a)) => {
            if !visited.enter(b.id(), a.id()) {
                return Node::list();
            }
            diff_lists(b, a, visited)
        }
        _ => {
            if before.same_value(after) {
                Node::Absent
            } else {
                shallow_copy(after)
            }
        }
    }
}

fn diff_maps(before: &MapNode, after: &MapNode, visited: &mut PairVisited) -> MapNode {
    let mut out: Vec<(String, Node)> = Vec::new();
    for (key, after_value) in after.entries() {
        match before.get(&key) {
            None => out.push((key, after_value)),
            Some(before_value) => {
                if before_value.same_value(&after_value) {
                    continue;
                }
                if same_container_kind(&before_value, &after_value) {
                    let nested = diff_nodes(&before_value, &after_value, visited);
                    if !is_empty_diff(&nested) {
                        out.push((key, nested));
                    }
                } else {
                    out.push((key, after_value));
                }
            }
        }
    }
    for (key, _) in before.entries() {
        if !after.contains_key(&key) {
            out.push((key, Node::Absent));
        }
    }
    MapNode::from_entries(out)
}

fn diff_lists(before: &ListNode, after: &ListNode, visited: &mut PairVisited) -> Node {
    if before.len() != after.len() {
        return shallow_copy(&Node::List(after.clone()));
    }
    let mut slots = Vec::with_capacity(after.len());
    let mut changed = false;
    for (b, a) in before.items().iter().zip(after.items().iter()) {
        let slot = if b.same_value(a) {
            Node::Absent
        } else if same_container_kind(b, a) {
            let nested = diff_nodes(b, a, visited);
            if is_empty_diff(&nested) {
                Node::Absent
            } else {
                nested
            }
        } else {
            a.clone()
        };
        changed |= !slot.is_absent();
        slots.push(slot);
    }
    if changed {
        Node::List(ListNode::from_items(slots))
    } else {
        Node::list()
    }
}

fn same_container_kind(a: &Node, b: &Node) -> bool {
    matches!((a, b), (Node::Map(_), Node::Map(_)) | (Node::List(_), Node::List(_)))
}

fn is_empty_diff(node: &Node) -> bool {
    node.is_absent() || node.is_empty_container()
}

fn shallow_copy(node: &Node) -> Node {
    match node {
        Node::Map(map) => Node::Map(MapNode::from_entries(map.entries())),
        Node::List(list) => Node::List(ListNode::from_items(list.items())),
        other => other.clone(),
    }
}
