//! Structural operations over arbor node trees.
//!
//! Every operation in this crate walks an arbitrarily deep, possibly cyclic
//! tree of maps, lists, and scalars. The traversal conventions are shared:
//! each top-level call allocates its own identity-keyed visited bookkeeping,
//! classifies each node once into the closed
//! map/list/scalar/absent set, and rebuilds fresh containers rather than
//! reusing input identity. The single exception is [`deep_freeze`], which is
//! contracted to mutate its input in place.
//!
//! Wrong-shape input never raises an error: operations degrade to
//! `Node::Absent`, `false`, or an unchanged value instead.
//!
//! # Key Operations
//!
//! - [`deep_equal`] / [`has_same_structure`] -- Structural comparison
//! - [`diff`] -- Patch-like difference, removals marked with `Node::Absent`
//! - [`merge`] -- Recursive map merge with list concatenation
//! - [`deep_clone`] -- Deep copy with cycle re-linking
//! - [`all_keys`] -- Dot-joined leaf path enumeration
//! - [`remove_empty_containers`] / [`remove_undefined_values`] /
//!   [`remove_named_keys`] -- Bottom-up pruning family
//! - [`flatten`] / [`unflatten`] -- Dotted-path representation
//! - [`get_nested_value`] / [`is_property_defined`] -- Path accessors
//! - [`deep_freeze`] -- In-place whole-tree immutability
//! - [`map_values`] -- Single-level value transform

pub mod clone;
pub mod compare;
pub mod diff;
pub mod flatten;
pub mod freeze;
pub mod keys;
pub mod mapping;
pub mod merge;
pub mod path;
pub mod prune;
mod visit;

pub use clone::deep_clone;
pub use compare::{deep_equal, has_same_structure};
pub use diff::diff;
pub use flatten::{flatten, unflatten};
pub use freeze::deep_freeze;
pub use keys::all_keys;
pub use mapping::map_values;
pub use merge::merge;
pub use path::{get_nested_value, is_property_defined};
pub use prune::{remove_empty_containers, remove_named_keys, remove_undefined_values};
