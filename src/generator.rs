//! Windowed candidate generation
//!
//! Ties the engine together: counts the output, lands on the first requested
//! rank with the skip-ahead indexer, then streams candidates from there
//! through combinations, orderings and per-word variants.

use crate::cli::Args;
use crate::combinatorics::{Combinations, Permutations};
use crate::counting::{possibilities_number, possibilities_within};
use crate::error::{LeetError, Result};
use crate::filter::LengthFilter;
use crate::indexer::SkipAheadIndexer;
use crate::variants::WordVariants;
use crate::words::WordSet;

/// Generator configuration
pub struct GeneratorConfig {
    pub words: Vec<String>,
    pub permute: bool,
    pub filter: LengthFilter,
    pub start: u128,
    pub end: Option<u128>,
}

impl GeneratorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            words: args.collect_words()?,
            permute: args.permute,
            filter: args.length_filter()?,
            start: args.start,
            end: args.end,
        })
    }
}

/// Progress of one windowed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Start rank found, nothing emitted yet
    Located,
    /// Looking for the next combination that passes the length filter
    Filtering,
    /// Producing variants
    Emitting,
    /// Window closed or source ran out
    Exhausted,
    /// Start rank was past the last candidate
    RankOutOfRange,
}

/// Half-open rank interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u128,
    pub end: u128,
}

impl Window {
    /// Create a window, rejecting empty or inverted ranges
    pub fn new(start: u128, end: u128) -> Result<Self> {
        if end <= start {
            return Err(LeetError::invalid_window(start, end));
        }
        Ok(Self { start, end })
    }

    pub fn len(&self) -> u128 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Candidate generator for one word set
#[derive(Debug, Clone)]
pub struct Generator {
    words: WordSet,
    permute: bool,
    filter: LengthFilter,
}

impl Generator {
    pub fn new<I, S>(words: I, permute: bool, filter: LengthFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: WordSet::new(words),
            permute,
            filter,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.words.iter().cloned(), config.permute, config.filter)
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// Number of candidates this generator produces, length filter included
    pub fn possibilities(&self) -> Result<u128> {
        possibilities_within(&self.words, self.permute, &self.filter)
    }

    /// Number of candidates with the length filter ignored
    pub fn unfiltered_possibilities(&self) -> Result<u128> {
        possibilities_number(&self.words, self.permute)
    }

    /// Stream the candidates with ranks in `[start, end)`.
    ///
    /// An explicit `end` must be greater than `start`. Without one, the
    /// window runs to the last candidate, and a start past the end simply
    /// produces nothing.
    pub fn candidates(&self, start: u128, end: Option<u128>) -> Result<Candidates> {
        let end = match end {
            Some(end) => Window::new(start, end)?.end,
            None => self.possibilities()?,
        };

        if end <= start {
            log::debug!("start {} is at or past the last candidate ({})", start, end);
            return Ok(Candidates::out_of_range(self));
        }

        let indexer = SkipAheadIndexer::new(&self.words, self.permute, self.filter);
        let Some(cursor) = indexer.locate(start)? else {
            return Ok(Candidates::out_of_range(self));
        };

        let word = self.words.arrange(&cursor.combination, &cursor.ordering);
        let variants = WordVariants::starting_at(&word, cursor.variant_offset);

        Ok(Candidates {
            words: self.words.clone(),
            permute: self.permute,
            filter: self.filter,
            combinations: cursor.combinations,
            combination: cursor.combination,
            permutations: cursor.permutations,
            variants: Some(variants),
            remaining: end - start,
            emitted: 0,
            state: RunState::Located,
        })
    }
}

/// Lazy stream of candidates for one window.
///
/// Stopping early is always safe; nothing is held beyond the current word.
#[derive(Debug, Clone)]
pub struct Candidates {
    words: WordSet,
    permute: bool,
    filter: LengthFilter,
    combinations: Combinations,
    combination: Vec<usize>,
    permutations: Permutations,
    variants: Option<WordVariants>,
    remaining: u128,
    emitted: u128,
    state: RunState,
}

impl Candidates {
    fn out_of_range(generator: &Generator) -> Self {
        Self {
            words: generator.words.clone(),
            permute: generator.permute,
            filter: generator.filter,
            combinations: Combinations::new(0),
            combination: Vec::new(),
            permutations: Permutations::starting_at(0, 1, false),
            variants: None,
            remaining: 0,
            emitted: 0,
            state: RunState::RankOutOfRange,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Candidates produced so far
    pub fn emitted(&self) -> u128 {
        self.emitted
    }

    /// Candidates left in the window, if the source does not run out first
    pub fn remaining(&self) -> u128 {
        self.remaining
    }

    fn finish(&mut self) -> Option<String> {
        if self.state != RunState::RankOutOfRange {
            self.state = RunState::Exhausted;
        }
        self.variants = None;
        None
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                return self.finish();
            }

            if let Some(candidate) = self.variants.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                self.emitted += 1;
                self.state = RunState::Emitting;
                return Some(candidate);
            }

            if let Some(ordering) = self.permutations.next() {
                let word = self.words.arrange(&self.combination, &ordering);
                self.variants = Some(WordVariants::new(&word));
                continue;
            }

            self.state = RunState::Filtering;
            let words = &self.words;
            let filter = &self.filter;
            match self
                .combinations
                .find(|c| filter.matches_len(words.joined_len(c)))
            {
                Some(combination) => {
                    log::trace!("entering combination {:?}", combination);
                    self.permutations = Permutations::new(combination.len(), self.permute);
                    self.combination = combination;
                }
                None => return self.finish(),
            }
        }
    }
}

impl std::iter::FusedIterator for Candidates {}

/// Stream the candidates with ranks in `[start, end)` for a word list.
///
/// Convenience wrapper around [`Generator::candidates`].
pub fn enumerate<I, S>(
    words: I,
    minlen: usize,
    maxlen: usize,
    permute: bool,
    start: u128,
    end: Option<u128>,
) -> anyhow::Result<Candidates>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let filter = LengthFilter::new(minlen, maxlen)?;
    let generator = Generator::new(words, permute, filter);
    Ok(generator.candidates(start, end)?)
}
