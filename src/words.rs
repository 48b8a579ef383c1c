//! Seed word set
//!
//! Holds the input words in order together with each word's length and
//! variation count, so that counting a combination never has to rescan text.

use crate::counting::variations_number;
use crate::error::{LeetError, Result};

/// Ordered input words, duplicates allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
    lengths: Vec<usize>,
    /// `None` when a word alone has more variants than fit in `u128`
    variations: Vec<Option<u128>>,
}

impl WordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let lengths = words.iter().map(|w| w.chars().count()).collect();
        let variations = words.iter().map(|w| variations_number(w).ok()).collect();

        Self {
            words,
            lengths,
            variations,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Variation count of a single word.
    ///
    /// Overflow is only reported here, so a huge word costs nothing unless a
    /// combination that survives the length filter actually uses it.
    pub fn word_variations(&self, index: usize) -> Result<u128> {
        self.variations[index]
            .ok_or_else(|| LeetError::overflow(format!("variations of '{}'", self.words[index])))
    }

    /// Character length of the words at `indices` joined together
    pub fn joined_len(&self, indices: &[usize]) -> usize {
        indices.iter().map(|&i| self.lengths[i]).sum()
    }

    /// Join the words at `indices` with no separator
    pub fn join(&self, indices: &[usize]) -> String {
        indices.iter().map(|&i| self.words[i].as_str()).collect()
    }

    /// Join a combination's words in the given ordering.
    ///
    /// `ordering` holds positions into `combination`, not word indices.
    pub fn arrange(&self, combination: &[usize], ordering: &[usize]) -> String {
        ordering
            .iter()
            .map(|&position| self.words[combination[position]].as_str())
            .collect()
    }
}
