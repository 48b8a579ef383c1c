//! Closed-form candidate counting
//!
//! Every count here must agree with what the enumerators actually produce:
//! the skip-ahead arithmetic divides by these numbers, so an off-by-one in
//! any layer silently shifts every window.

use crate::combinatorics::Combinations;
use crate::error::{LeetError, Result};
use crate::filter::LengthFilter;
use crate::leet::variant_count;
use crate::words::WordSet;

/// Number of leetspeak variants of a word
pub fn variations_number(word: &str) -> Result<u128> {
    word.chars().try_fold(1u128, |acc, c| {
        acc.checked_mul(variant_count(c) as u128)
            .ok_or_else(|| LeetError::overflow(format!("variations of '{}'", word)))
    })
}

/// Number of orderings generated for a combination of `k` words
pub fn permutations_number(k: usize, permute: bool) -> Result<u128> {
    if !permute {
        return Ok(1);
    }
    (2..=k as u128).try_fold(1u128, |acc, i| {
        acc.checked_mul(i)
            .ok_or_else(|| LeetError::overflow(format!("{}!", k)))
    })
}

/// Candidates produced by one combination: orderings times variants per ordering
pub fn combination_weight(words: &WordSet, combination: &[usize], permute: bool) -> Result<u128> {
    let variations = combination_variations(words, combination)?;
    permutations_number(combination.len(), permute)?
        .checked_mul(variations)
        .ok_or_else(|| LeetError::overflow("candidates of one combination"))
}

/// Variants of the joined combination, from the cached per-word counts
pub fn combination_variations(words: &WordSet, combination: &[usize]) -> Result<u128> {
    combination.iter().try_fold(1u128, |acc, &i| {
        acc.checked_mul(words.word_variations(i)?)
            .ok_or_else(|| LeetError::overflow(format!("variations of '{}'", words.join(combination))))
    })
}

/// Total candidates over all combinations, ignoring any length filter
pub fn possibilities_number(words: &WordSet, permute: bool) -> Result<u128> {
    possibilities_within(words, permute, &LengthFilter::unbounded())
}

/// Total candidates over the combinations whose joined length passes `filter`
pub fn possibilities_within(words: &WordSet, permute: bool, filter: &LengthFilter) -> Result<u128> {
    let mut total = 0u128;

    for combination in Combinations::new(words.len()) {
        if !filter.matches_len(words.joined_len(&combination)) {
            continue;
        }
        let weight = combination_weight(words, &combination, permute)?;
        total = total
            .checked_add(weight)
            .ok_or_else(|| LeetError::overflow("total candidate count"))?;
    }

    Ok(total)
}
