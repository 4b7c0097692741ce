//! Structural comparison: deep equality and shape matching.

use arbor_node::Node;

/// Deep structural equality.
///
/// Containers of different kinds are never equal. Lists compare by length
/// and position, maps by owned-key count plus per-key recursion, and
/// everything else by `===` semantics (`NaN != NaN`, `+0 == -0`, identity
/// for opaque values).
///
/// Carries no cycle protection: comparing two structurally symmetric cyclic
/// trees does not terminate. Callers own that bound.
pub fn deep_equal(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::List(x), Node::List(y)) => {
            x.len() == y.len()
                && x.items()
                    .iter()
                    .zip(y.items().iter())
                    .all(|(i, j)| deep_equal(i, j))
        }
        (Node::Map(x), Node::Map(y)) => {
            x.len() == y.len()
                && x.entries().iter().all(|(key, value)| match y.get(key) {
                    Some(other) => deep_equal(value, &other),
                    None => false,
                })
        }
        _ => a.same_value(b),
    }
}

/// Returns `true` if `value` has (at least) the structure of `shape`.
///
/// Container kinds must match recursively; `value` must own every key or
/// index that `shape` owns. A scalar leaf in `shape` is an exemplar of
/// *type*, not value: it matches any scalar at that position.
pub fn has_same_structure(value: &Node, shape: &Node) -> bool {
    match (value, shape) {
        (Node::Map(v), Node::Map(s)) => s.entries().iter().all(|(key, sub_shape)| {
            match v.get(key) {
                Some(sub_value) => has_same_structure(&sub_value, sub_shape),
                None => false,
            }
        }),
        (Node::List(v), Node::List(s)) => {
            v.len() >= s.len()
                && s.items().iter().enumerate().all(|(index, sub_shape)| {
                    v.get(index)
                        .is_some_and(|sub_value| has_same_structure(&sub_value, sub_shape))
                })
        }
        (value, shape) => !value.is_container() && !shape.is_container(),
    }
}
