//! Error types shared by the fallible table operations.

use thiserror::Error;

/// Errors returned by fallible [`ChainedTable`](crate::ChainedTable)
/// operations.
///
/// Key absence is never an error: `pop` and `search_key` report a missing
/// key as `None`, a normal outcome. None of these values terminate the
/// process; how to react is the caller's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The key was empty. Keys must be non-empty strings; the table is left
    /// untouched.
    #[error("key must be a non-empty string")]
    InvalidKey,
    /// The value was empty where `push` requires one; the table is left
    /// untouched.
    #[error("value must be a non-empty string")]
    InvalidValue,
    /// A node or string copy could not be allocated. The table remains in
    /// its prior valid state.
    #[error("memory allocation failed")]
    AllocationFailure,
}
