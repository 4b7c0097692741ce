//! Recursive merge of two trees.

use arbor_node::{ListNode, MapNode, Node};

use crate::visit::PairVisited;

/// Merge `b` into `a`, producing a new tree that owns every key from both.
///
/// For a key present on both sides: two lists concatenate (`a`'s items then
/// `b`'s), two maps merge recursively, and anything else resolves to `b`'s
/// value. One-sided keys are carried over unmodified, shared by reference
/// with the input. Two list roots concatenate.
///
/// Returns `Node::Absent` when the roots are not containers of the same
/// kind; wrong-shape input is an ordinary outcome, not an error.
///
/// A revisited container pair (cyclic input) contributes `b`'s value without
/// further recursion.
pub fn merge(a: &Node, b: &Node) -> Node {
    match (a, b) {
        (Node::Map(x), Node::Map(y)) => {
            let mut visited = PairVisited::new();
            visited.enter(x.id(), y.id());
            Node::Map(merge_maps(x, y, &mut visited))
        }
        (Node::List(x), Node::List(y)) => Node::List(concat_lists(x, y)),
        _ => Node::Absent,
    }
}

fn merge_values(a: &Node, b: &Node, visited: &mut PairVisited) -> Node {
    match (a, b) {
        (Node::List(x), Node::List(y)) => Node::List(concat_lists(x, y)),
        (Node::Map(x), Node::Map(y)) => {
            if !visited.enter(x.id(), y.id()) {
                return b.clone();
            }
            Node::Map(merge_maps(x, y, visited))
        }
        _ => b.clone(),
    }
}

fn merge_maps(a: &MapNode, b: &MapNode, visited: &mut PairVisited) -> MapNode {
    let mut out: Vec<(String, Node)> = Vec::new();
    for (key, a_value) in a.entries() {
        match b.get(&key) {
            Some(b_value) => out.push((key, merge_values(&a_value, &b_value, visited))),
            None => out.push((key, a_value)),
        }
    }
    for (key, b_value) in b.entries() {
        if !a.contains_key(&key) {
            out.push((key, b_value));
        }
    }
    MapNode::from_entries(out)
}

fn concat_lists(a: &ListNode, b: &ListNode) -> ListNode {
    let mut items = a.items();
    items.extend(b.items());
    ListNode::from_items(items)
}
