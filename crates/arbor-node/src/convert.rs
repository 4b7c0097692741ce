//! Conversion between [`Node`] trees and `serde_json::Value`.
//!
//! `from_json` is the ergonomic construction path (pairs with the `json!`
//! macro); `to_json` renders a node tree back out, omitting `Absent` map
//! entries and refusing cyclic input.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{NodeError, NodeResult};
use crate::node::{ListNode, MapNode, Node};

/// Build a node tree from a JSON value. Object key order is preserved.
pub fn from_json(value: Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => Node::Number(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => Node::Text(s),
        Value::Array(items) => {
            Node::List(ListNode::from_items(items.into_iter().map(from_json).collect()))
        }
        Value::Object(object) => Node::Map(MapNode::from_entries(
            object.into_iter().map(|(k, v)| (k, from_json(v))).collect(),
        )),
    }
}

/// Render a node tree as a JSON value.
///
/// `Absent` entries are omitted from objects and rendered as `null`
/// elsewhere; opaque scalars and non-finite numbers render as `null`.
/// Returns [`NodeError::Cyclic`] if a container recurs on its own path.
pub fn to_json(node: &Node) -> NodeResult<Value> {
    let mut on_path = HashSet::new();
    render(node, &mut on_path)
}

fn render(node: &Node, on_path: &mut HashSet<usize>) -> NodeResult<Value> {
    match node {
        Node::Absent | Node::Null => Ok(Value::Null),
        Node::Bool(b) => Ok(Value::Bool(*b)),
        Node::Number(n) => Ok(serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null)),
        Node::Text(t) => Ok(Value::String(t.clone())),
        Node::Opaque(_) => Ok(Value::Null),
        Node::List(list) => {
            if !on_path.insert(list.id()) {
                return Err(NodeError::Cyclic);
            }
            let mut items = Vec::with_capacity(list.len());
            for item in list.items() {
                items.push(render(&item, on_path)?);
            }
            on_path.remove(&list.id());
            Ok(Value::Array(items))
        }
        Node::Map(map) => {
            if !on_path.insert(map.id()) {
                return Err(NodeError::Cyclic);
            }
            let mut object = Map::new();
            for (key, value) in map.entries() {
                if value.is_absent() {
                    continue;
                }
                object.insert(key, render(&value, on_path)?);
            }
            on_path.remove(&map.id());
            Ok(Value::Object(object))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_scalars_and_containers() {
        let value = json!({
            "name": "John",
            "age": 30,
            "tags": ["a", "b"],
            "meta": {"active": true, "score": null}
        });
        let node = from_json(value.clone());
        assert_eq!(to_json(&node).unwrap(), value);
    }

    #[test]
    fn preserves_key_order() {
        let node = from_json(json!({"z": 1, "a": 2, "m": 3}));
        let map = node.as_map().unwrap();
        assert_eq!(
            map.keys(),
            vec!["z".to_string(), "a".to_string(), "m".to_string()]
        );
    }

    #[test]
    fn absent_entries_are_omitted_from_objects() {
        let node = from_json(json!({"a": 1}));
        node.as_map().unwrap().insert("gone", Node::Absent);
        assert_eq!(to_json(&node).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn absent_renders_as_null_in_lists() {
        let list = ListNode::from_items(vec![Node::from(1i64), Node::Absent]);
        assert_eq!(to_json(&Node::List(list)).unwrap(), json!([1, null]));
    }

    #[test]
    fn nan_renders_as_null() {
        assert_eq!(to_json(&Node::from(f64::NAN)).unwrap(), json!(null));
    }

    #[test]
    fn cyclic_tree_is_rejected() {
        let map = MapNode::new();
        map.insert("self", Node::Map(map.clone()));
        let err = to_json(&Node::Map(map)).unwrap_err();
        assert!(matches!(err, NodeError::Cyclic));
    }

    #[test]
    fn shared_but_acyclic_references_render() {
        let shared = from_json(json!({"x": 1}));
        let map = MapNode::new();
        map.insert("a", shared.clone());
        map.insert("b", shared);
        assert_eq!(
            to_json(&Node::Map(map)).unwrap(),
            json!({"a": {"x": 1}, "b": {"x": 1}})
        );
    }
}
