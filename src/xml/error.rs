//! Error types for namespace operations.

use thiserror::Error;

/// Errors raised by namespace lookups and key parsing.
///
/// An unknown Level/Version pair is not an error: it resolves to an empty
/// namespace set. Only misuse of an index or malformed input ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// Index outside `0..len` of a namespace set.
    #[error("namespace index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Text that is not an `L<level>V<version>` key.
    #[error("invalid SBML version key: {0:?}")]
    InvalidVersionKey(String),
}

impl NamespaceError {
    /// Create an index error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a key parse error.
    pub fn invalid_version_key(input: impl Into<String>) -> Self {
        Self::InvalidVersionKey(input.into())
    }
}
