//! The tagged node representation.
//!
//! A [`Node`] is either a scalar (number, text, boolean, null, or an opaque
//! value no traversal descends into), a container (map or list), or the
//! absence sentinel [`Node::Absent`]. Containers are `Rc<RefCell<..>>` cells:
//! cloning a container `Node` clones the handle, not the contents, so a
//! container has stable reference identity, can participate in cycles, and
//! can be frozen in place.
//!
//! Mutating accessors (`insert`, `remove`, `push`) panic once a container has
//! been frozen, the same way `RefCell::borrow_mut` panics on a conflicting
//! borrow. The `try_*` variants return [`NodeError::Frozen`] instead.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{NodeError, NodeResult};

/// The exhaustive classification of a [`Node`].
///
/// Every traversal switches over this closed set once per node, so that
/// maps, lists, scalars, and absence are never conflated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A map-like container with insertion-ordered string keys.
    Map,
    /// A list-like container.
    List,
    /// Any non-container value other than the absence sentinel.
    Scalar,
    /// The absence sentinel, distinct from `Null`.
    Absent,
}

/// A hierarchical value.
#[derive(Clone)]
pub enum Node {
    /// The absence sentinel: "no value here", distinct from `Null`.
    Absent,
    /// An explicit null.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar. Compared with IEEE-754 `==` semantics, so
    /// `NaN != NaN` and `+0 == -0`.
    Number(f64),
    /// A text scalar.
    Text(String),
    /// An opaque scalar compared by identity and never recursed into.
    Opaque(OpaqueNode),
    /// A list container.
    List(ListNode),
    /// A map container.
    Map(MapNode),
}

impl Node {
    /// A fresh, empty map container.
    pub fn map() -> Self {
        Node::Map(MapNode::new())
    }

    /// A fresh, empty list container.
    pub fn list() -> Self {
        Node::List(ListNode::new())
    }

    /// Classify this node.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Map(_) => Kind::Map,
            Node::List(_) => Kind::List,
            Node::Absent => Kind::Absent,
            _ => Kind::Scalar,
        }
    }

    /// Returns `true` if this node is a map or list container.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Map(_) | Node::List(_))
    }

    /// Returns `true` if this node is a plain map container.
    ///
    /// Lists and opaque values (the model's stand-in for dates, regexes,
    /// class instances, and other foreign objects) are not plain.
    pub fn is_plain_container(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// Returns `true` if this node is a container that owns zero entries.
    ///
    /// Non-containers are `false`, never an error.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Node::Map(map) => map.is_empty(),
            Node::List(list) => list.is_empty(),
            _ => false,
        }
    }

    /// Returns `true` if this node is the absence sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    /// The map cell, if this node is a map container.
    pub fn as_map(&self) -> Option<&MapNode> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The list cell, if this node is a list container.
    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Shallow identity equality (`===` semantics).
    ///
    /// Scalars compare by value (`NaN != NaN`, `+0 == -0`); containers and
    /// opaque values compare by reference identity; `Absent` equals only
    /// `Absent` and `Null` only `Null`.
    pub fn same_value(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Absent, Node::Absent) => true,
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Opaque(a), Node::Opaque(b)) => a.ptr_eq(b),
            (Node::List(a), Node::List(b)) => a.ptr_eq(b),
            (Node::Map(a), Node::Map(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value as f64)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Absent => f.write_str("Absent"),
            Node::Null => f.write_str("Null"),
            Node::Bool(b) => write!(f, "Bool({b})"),
            Node::Number(n) => write!(f, "Number({n})"),
            Node::Text(t) => write!(f, "Text({t:?})"),
            Node::Opaque(o) => o.fmt(f),
            Node::List(l) => l.fmt(f),
            Node::Map(m) => m.fmt(f),
        }
    }
}

/// A map container cell: insertion-ordered `(key, value)` entries behind a
/// shared, freezable handle. Cloning clones the handle.
#[derive(Clone, Default)]
pub struct MapNode(Rc<RefCell<MapCell>>);

#[derive(Default)]
struct MapCell {
    frozen: bool,
    entries: Vec<(String, Node)>,
}

impl MapNode {
    /// Create an empty map container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map container from entries. Later duplicate keys overwrite
    /// earlier ones in place.
    pub fn from_entries(entries: Vec<(String, Node)>) -> Self {
        let map = Self::new();
        {
            let mut cell = map.0.borrow_mut();
            for (key, value) in entries {
                Self::insert_entry(&mut cell.entries, key, value);
            }
        }
        map
    }

    /// The cell address, used as the identity key during traversals.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    /// Returns `true` if both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    /// Returns `true` if the map owns no entries.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    /// Returns `true` if the map owns `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().entries.iter().any(|(k, _)| k.as_str() == key)
    }

    /// Look up a value handle by key. A stored `Absent` value yields
    /// `Some(Node::Absent)`, which is how a present-but-undefined entry is
    /// distinguished from a missing key.
    pub fn get(&self, key: &str) -> Option<Node> {
        self.0
            .borrow()
            .entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.clone())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Entries in insertion order, as cloned handles.
    pub fn entries(&self) -> Vec<(String, Node)> {
        self.0.borrow().entries.clone()
    }

    /// Insert or overwrite an entry, returning the previous value if any.
    /// An overwritten key keeps its original position.
    ///
    /// # Panics
    ///
    /// Panics if the container has been frozen.
    pub fn insert(&self, key: impl Into<String>, value: Node) -> Option<Node> {
        match self.try_insert(key, value) {
            Ok(previous) => previous,
            Err(_) => panic!("insert on frozen container"),
        }
    }

    /// Fallible variant of [`insert`](Self::insert).
    pub fn try_insert(&self, key: impl Into<String>, value: Node) -> NodeResult<Option<Node>> {
        let mut cell = self.0.borrow_mut();
        if cell.frozen {
            return Err(NodeError::Frozen);
        }
        Ok(Self::insert_entry(&mut cell.entries, key.into(), value))
    }

    /// Remove an entry by key, returning its value if it was present.
    ///
    /// # Panics
    ///
    /// Panics if the container has been frozen.
    pub fn remove(&self, key: &str) -> Option<Node> {
        match self.try_remove(key) {
            Ok(previous) => previous,
            Err(_) => panic!("remove on frozen container"),
        }
    }

    /// Fallible variant of [`remove`](Self::remove).
    pub fn try_remove(&self, key: &str) -> NodeResult<Option<Node>> {
        let mut cell = self.0.borrow_mut();
        if cell.frozen {
            return Err(NodeError::Frozen);
        }
        let position = cell.entries.iter().position(|(k, _)| k.as_str() == key);
        Ok(position.map(|i| cell.entries.remove(i).1))
    }

    /// Mark this container immutable. Irreversible.
    pub fn freeze(&self) {
        self.0.borrow_mut().frozen = true;
    }

    /// Returns `true` if this container has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.0.borrow().frozen
    }

    fn insert_entry(entries: &mut Vec<(String, Node)>, key: String, value: Node) -> Option<Node> {
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
            None => {
                entries.push((key, value));
                None
            }
        }
    }
}

impl fmt::Debug for MapNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

/// A list container cell behind a shared, freezable handle.
#[derive(Clone, Default)]
pub struct ListNode(Rc<RefCell<ListCell>>);

#[derive(Default)]
struct ListCell {
    frozen: bool,
    items: Vec<Node>,
}

impl ListNode {
    /// Create an empty list container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list container from items.
    pub fn from_items(items: Vec<Node>) -> Self {
        let list = Self::new();
        list.0.borrow_mut().items = items;
        list
    }

    /// The cell address, used as the identity key during traversals.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    /// Returns `true` if both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.borrow().items.len()
    }

    /// Returns `true` if the list owns no items.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().items.is_empty()
    }

    /// Look up an item handle by index.
    pub fn get(&self, index: usize) -> Option<Node> {
        self.0.borrow().items.get(index).cloned()
    }

    /// Items in order, as cloned handles.
    pub fn items(&self) -> Vec<Node> {
        self.0.borrow().items.clone()
    }

    /// Append an item.
    ///
    /// # Panics
    ///
    /// Panics if the container has been frozen.
    pub fn push(&self, item: Node) {
        if self.try_push(item).is_err() {
            panic!("push on frozen container");
        }
    }

    /// Fallible variant of [`push`](Self::push).
    pub fn try_push(&self, item: Node) -> NodeResult<()> {
        let mut cell = self.0.borrow_mut();
        if cell.frozen {
            return Err(NodeError::Frozen);
        }
        cell.items.push(item);
        Ok(())
    }

    /// Mark this container immutable. Irreversible.
    pub fn freeze(&self) {
        self.0.borrow_mut().frozen = true;
    }

    /// Returns `true` if this container has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.0.borrow().frozen
    }
}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

/// An opaque scalar: a value traversals never descend into, compared only by
/// reference identity. Cloning shares the underlying allocation.
#[derive(Clone)]
pub struct OpaqueNode(Rc<dyn Any>);

impl OpaqueNode {
    /// Wrap an arbitrary value as an opaque scalar.
    pub fn new(value: impl Any + 'static) -> Self {
        Self(Rc::new(value))
    }

    /// Returns `true` if both handles wrap the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Borrow the wrapped value, if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for OpaqueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}
