//! Value model for arbor.
//!
//! This crate provides the tagged node representation used by every arbor
//! operation crate: a closed set of scalar variants plus two container
//! variants (map and list) backed by reference-counted cells, so that
//! container values have stable reference identity, can form cycles, and
//! can be frozen in place.
//!
//! # Key Types
//!
//! - [`Node`] -- The value itself: scalar, map container, list container, or
//!   the absence sentinel
//! - [`Kind`] -- The exhaustive four-way classification every traversal
//!   switches over (map / list / scalar / absent)
//! - [`MapNode`] / [`ListNode`] -- Shared container cells with insertion-order
//!   entries and a freeze flag
//! - [`OpaqueNode`] -- An identity-compared scalar wrapper for values no
//!   traversal descends into
//!
//! Conversion to and from `serde_json::Value` lives in [`convert`].

pub mod convert;
pub mod error;
pub mod node;

pub use convert::{from_json, to_json};
pub use error::{NodeError, NodeResult};
pub use node::{Kind, ListNode, MapNode, Node, OpaqueNode};
