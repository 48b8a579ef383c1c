//! Per-word leetspeak expansion
//!
//! A word expands to the Cartesian product of its characters' variants, with
//! the last character varying fastest. The product is walked as an odometer,
//! so any position can be reached directly by mixed-radix decomposition.

use crate::leet::letter_variants;

/// Lazy sequence of all leetspeak variants of one word
#[derive(Debug, Clone)]
pub struct WordVariants {
    columns: Vec<Vec<String>>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl WordVariants {
    /// Create a sequence positioned at the first variant
    pub fn new(word: &str) -> Self {
        let columns: Vec<Vec<String>> = word.chars().map(letter_variants).collect();
        let digits = vec![0; columns.len()];

        Self {
            columns,
            digits,
            exhausted: false,
        }
    }

    /// Create a sequence positioned at the variant with the given offset
    pub fn starting_at(word: &str, offset: u128) -> Self {
        let mut variants = Self::new(word);
        variants.seek(offset);
        variants
    }

    /// Jump to the variant at `offset`, counted from the first variant.
    ///
    /// Equivalent to rewinding and discarding `offset` elements. Offsets past
    /// the end leave the sequence exhausted.
    pub fn seek(&mut self, offset: u128) {
        let mut rest = offset;

        for (digit, column) in self.digits.iter_mut().zip(&self.columns).rev() {
            let radix = column.len() as u128;
            *digit = (rest % radix) as usize;
            rest /= radix;
        }

        self.exhausted = rest > 0;
    }

    /// Restart from the first variant
    pub fn rewind(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.exhausted = false;
    }

    fn current(&self) -> String {
        self.columns
            .iter()
            .zip(&self.digits)
            .map(|(column, &digit)| column[digit].as_str())
            .collect()
    }

    /// Advance the odometer; returns false once every digit has wrapped
    fn advance(&mut self) -> bool {
        for (digit, column) in self.digits.iter_mut().zip(&self.columns).rev() {
            *digit += 1;
            if *digit < column.len() {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for WordVariants {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let variant = self.current();
        self.exhausted = !self.advance();
        Some(variant)
    }
}

impl std::iter::FusedIterator for WordVariants {}

/// Leetspeak variants of a word in canonical order
pub fn word_variants(word: &str) -> WordVariants {
    WordVariants::new(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character() {
        let variants: Vec<String> = word_variants("a").collect();
        assert_eq!(variants, vec!["a", "A", "4", "@"]);
    }

    #[test]
    fn test_empty_word() {
        let variants: Vec<String> = word_variants("").collect();
        assert_eq!(variants, vec![String::new()]);
    }

    #[test]
    fn test_last_character_varies_fastest() {
        let variants: Vec<String> = word_variants("ha").collect();
        assert_eq!(
            variants,
            vec!["ha", "hA", "h4", "h@", "Ha", "HA", "H4", "H@"]
        );
    }

    #[test]
    fn test_seek_matches_skip() {
        let word = "tool";
        let all: Vec<String> = word_variants(word).collect();

        for offset in 0..all.len() {
            let skipped: Vec<String> = word_variants(word).skip(offset).collect();
            let seeked: Vec<String> = WordVariants::starting_at(word, offset as u128).collect();
            assert_eq!(seeked, skipped, "offset {}", offset);
        }
    }

    #[test]
    fn test_seek_past_end() {
        let mut variants = WordVariants::starting_at("bc", 4);
        assert_eq!(variants.next(), None);

        let mut variants = WordVariants::starting_at("", 1);
        assert_eq!(variants.next(), None);
    }

    #[test]
    fn test_rewind() {
        let mut variants = word_variants("ab");
        let first: Vec<String> = variants.by_ref().collect();
        variants.rewind();
        let second: Vec<String> = variants.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn test_variant_lengths() {
        for variant in word_variants("Test1!") {
            assert_eq!(variant.chars().count(), 6);
        }
    }
}
