//! Errors returned by tree operations.

/// Errors triggered by [`Tree`](crate::tree::Tree) operations.
///
/// A failed operation leaves the tree untouched. Looking up a value that
/// isn't stored is not an error: `find` and `contains` report it through
/// their return values, and removing an absent value is a no-op.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError<T> {
    /// Error when inserting a value the tree already holds. Wraps the
    /// rejected value so the caller can reuse it.
    #[error("value already exists in tree")]
    DuplicateValue(T),

    /// Error when asking for the minimum or maximum value of an empty
    /// (sub)tree.
    #[error("subtree is empty")]
    EmptySubtree,
}
