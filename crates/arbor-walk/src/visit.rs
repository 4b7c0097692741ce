//! Per-call bookkeeping for cycle-safe traversal.
//!
//! Every walk in this crate follows the same contract: visit each container
//! at most once per top-level call, keyed by the container cell's address
//! (reference identity, never value equality). A revisited container yields
//! that operation's defined cycle contribution -- an empty or omitted result
//! for the pure rebuilds, leave-as-is for freeze -- instead of recursing.
//!
//! The structures here are allocated fresh inside each public entry point
//! and discarded on return, so traversals are re-entrant and never leak
//! state across calls.

use std::collections::{HashMap, HashSet};

use arbor_node::Node;

/// Identity-keyed visited set for unary walks.
#[derive(Default)]
pub(crate) struct Visited(HashSet<usize>);

impl Visited {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mark `id` visited. Returns `false` if it was already visited.
    pub(crate) fn enter(&mut self, id: usize) -> bool {
        self.0.insert(id)
    }
}

/// Visited set for binary walks (diff, merge), keyed by the pair of
/// container addresses entered together.
#[derive(Default)]
pub(crate) struct PairVisited(HashSet<(usize, usize)>);

impl PairVisited {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mark the pair visited. Returns `false` if it was already visited.
    pub(crate) fn enter(&mut self, left: usize, right: usize) -> bool {
        self.0.insert((left, right))
    }
}

/// Input-address to output-handle map for deep clone.
///
/// Registering the output container *before* descending into its children is
/// what turns an input cycle into an equally cyclic output: a repeated input
/// reference resolves to the already-allocated clone instead of recursing.
#[derive(Default)]
pub(crate) struct CloneMap(HashMap<usize, Node>);

impl CloneMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, id: usize) -> Option<Node> {
        self.0.get(&id).cloned()
    }

    pub(crate) fn register(&mut self, id: usize, clone: Node) {
        self.0.insert(id, clone);
    }
}
