//! Rank to position lookup
//!
//! Finds where candidate number `rank` lives without producing any of the
//! candidates before it. Whole combinations are skipped by their weight,
//! whole orderings inside the landing combination by integer division, and
//! only the final offset lands inside a single variant sequence.

use crate::combinatorics::{Combinations, Permutations};
use crate::counting::{combination_variations, permutations_number};
use crate::error::{LeetError, Result};
use crate::filter::LengthFilter;
use crate::words::WordSet;

/// Resumable position in the candidate order.
///
/// The enumerator states sit just past `combination` and `ordering`, so the
/// driver picks up from here without revisiting anything.
#[derive(Debug, Clone)]
pub struct Cursor {
    /// Rank this cursor points at
    pub rank: u128,
    /// Landing combination, as word indices
    pub combination: Vec<usize>,
    /// Landing ordering, as positions into `combination`
    pub ordering: Vec<usize>,
    /// Offset into the landing ordering's variant sequence
    pub variant_offset: u128,
    /// Remaining combinations after the landing one
    pub combinations: Combinations,
    /// Remaining orderings of the landing combination
    pub permutations: Permutations,
    /// How many combinations were weighed to find the landing one
    pub combinations_examined: u64,
}

/// Locates ranks in the output of one word set configuration
#[derive(Debug, Clone, Copy)]
pub struct SkipAheadIndexer<'a> {
    words: &'a WordSet,
    permute: bool,
    filter: LengthFilter,
}

impl<'a> SkipAheadIndexer<'a> {
    pub fn new(words: &'a WordSet, permute: bool, filter: LengthFilter) -> Self {
        Self {
            words,
            permute,
            filter,
        }
    }

    /// Locate candidate `rank`.
    ///
    /// Returns `Ok(None)` when the rank is past the last candidate.
    /// Combinations rejected by the length filter carry no weight.
    pub fn locate(&self, rank: u128) -> Result<Option<Cursor>> {
        let mut combinations = Combinations::new(self.words.len());
        let mut before = 0u128;
        let mut examined = 0u64;

        while let Some(combination) = combinations.next() {
            if !self.filter.matches_len(self.words.joined_len(&combination)) {
                continue;
            }
            examined += 1;

            let variations = combination_variations(self.words, &combination)?;
            let weight = permutations_number(combination.len(), self.permute)?
                .checked_mul(variations)
                .ok_or_else(|| LeetError::overflow("candidates of one combination"))?;
            let after = before
                .checked_add(weight)
                .ok_or_else(|| LeetError::overflow("running candidate count"))?;

            if after <= rank {
                before = after;
                continue;
            }

            let local = rank - before;
            let ordering_rank = local / variations;
            let variant_offset = local % variations;

            let mut permutations =
                Permutations::starting_at(combination.len(), ordering_rank, self.permute);
            // The stop condition keeps `ordering_rank` below the ordering count
            let Some(ordering) = permutations.next() else {
                return Ok(None);
            };

            log::debug!(
                "rank {} -> combination {:?}, ordering {:?}, variant offset {} ({} combinations examined)",
                rank,
                combination,
                ordering,
                variant_offset,
                examined
            );

            return Ok(Some(Cursor {
                rank,
                combination,
                ordering,
                variant_offset,
                combinations,
                permutations,
                combinations_examined: examined,
            }));
        }

        log::debug!("rank {} is past the last candidate ({} total)", rank, before);
        Ok(None)
    }
}
