//! Error types for the node model.

/// Errors surfaced by the node model.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// A mutating accessor was called on a frozen container.
    #[error("container is frozen")]
    Frozen,

    /// A cyclic structure was encountered where a finite rendering is
    /// required (e.g. conversion to JSON).
    #[error("cyclic structure cannot be rendered")]
    Cyclic,
}

/// Convenience alias for node results.
pub type NodeResult<T> = Result<T, NodeError>;
