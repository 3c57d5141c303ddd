use thiserror::Error;

/// Errors returned by [`AvlTree`](crate::AvlTree) queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation requires at least one value, but the tree is empty.
    #[error("tree is empty")]
    Empty,
}
