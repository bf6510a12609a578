//! Dictionary error types.

use thiserror::Error;

/// Errors returned by [`Dictionary`](crate::Dictionary) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// The searched word has no entry.
    #[error("could not find the word you were looking for")]
    NotFound,

    /// `add` was called for a word that already has an entry.
    #[error("given word already exists in dictionary")]
    WordExists,

    /// `update` was called for a word without an entry.
    #[error("given word does not exist in dictionary")]
    WordDoesNotExist,
}
