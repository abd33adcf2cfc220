use thiserror::Error;

/// Errors reported by the fallible [`BTreeBag`](crate::BTreeBag) operations.
///
/// Almost everything the container does is infallible; only the extremum
/// queries can fail, and only on a tree with no keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// `min` or `max` was called on an empty tree.
    #[error("empty tree")]
    EmptyTree,
}

/// A `Result` alias using the container's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
