//! # Word Table
//!
//! The words placed on the current board and which of them have been found.

use crate::game::WordId;
use crate::generation::PlacedWord;
use serde::{Deserialize, Serialize};

/// A placed word and its progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub placed: PlacedWord,
    pub found: bool,
}

/// Placed words of one round, indexed by [`WordId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTable {
    entries: Vec<WordEntry>,
}

impl WordTable {
    /// Builds the table from the generator's placed words.
    pub fn new(placed: Vec<PlacedWord>) -> Self {
        Self {
            entries: placed
                .into_iter()
                .map(|placed| WordEntry {
                    placed,
                    found: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word_id: WordId) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.placed.id == word_id)
    }

    /// Gets the text of a placed word.
    pub fn text(&self, word_id: WordId) -> Option<&str> {
        self.get(word_id).map(|entry| entry.placed.text.as_str())
    }

    pub fn is_found(&self, word_id: WordId) -> bool {
        self.get(word_id).is_some_and(|entry| entry.found)
    }

    /// Marks a word found. Returns false if it was unknown or already found.
    pub fn mark_found(&mut self, word_id: WordId) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.placed.id == word_id)
        {
            Some(entry) if !entry.found => {
                entry.found = true;
                true
            }
            _ => false,
        }
    }

    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.found).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }
}
