//! Exact-key word dictionary.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DictionaryError;

/// An in-memory mapping from words to their definitions.
///
/// Serializes as a plain JSON object of `word: definition` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the definition of `word`.
    pub fn search(&self, word: &str) -> Result<&str, DictionaryError> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or(DictionaryError::NotFound)
    }

    /// Adds a new entry. Fails if `word` is already defined.
    pub fn add(
        &mut self,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        match self.entries.entry(word.into()) {
            Entry::Occupied(_) => Err(DictionaryError::WordExists),
            Entry::Vacant(slot) => {
                debug!("Adding definition for {:?}", slot.key());
                slot.insert(definition.into());
                Ok(())
            }
        }
    }

    /// Replaces the definition of an existing entry. Fails if `word` is not
    /// defined.
    pub fn update(
        &mut self,
        word: &str,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        let current = self
            .entries
            .get_mut(word)
            .ok_or(DictionaryError::WordDoesNotExist)?;
        debug!("Updating definition for {:?}", word);
        *current = definition.into();
        Ok(())
    }

    /// Removes `word`. Removing an absent word is a no-op.
    pub fn delete(&mut self, word: &str) {
        if self.entries.remove(word).is_some() {
            debug!("Deleted definition for {:?}", word);
        }
    }

    /// Returns `true` if `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(word, definition)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(word, definition)| (word.as_str(), definition.as_str()))
    }
}

impl<W, D> FromIterator<(W, D)> for Dictionary
where
    W: Into<String>,
    D: Into<String>,
{
    /// Later pairs overwrite earlier ones with the same word.
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()))
                .collect(),
        }
    }
}
