//! Length filtering
//!
//! Candidates are filtered on the length of the concatenated words they come
//! from. Substitution never changes length, so a whole combination is either
//! kept or dropped before any of its variants are produced.

/// Default upper bound on concatenated length
pub const DEFAULT_MAX_LEN: usize = 32;

/// Inclusive length bounds, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    min: usize,
    max: usize,
}

impl LengthFilter {
    /// Create a new length filter
    pub fn new(min: usize, max: usize) -> anyhow::Result<Self> {
        if min > max {
            anyhow::bail!("Invalid length range: min ({}) must be <= max ({})", min, max);
        }
        Ok(Self { min, max })
    }

    /// A filter that keeps everything
    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: usize::MAX,
        }
    }

    /// Check if a word matches the filter
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        let len = if word.is_ascii() {
            word.len()
        } else {
            word.chars().count()
        };
        self.matches_len(len)
    }

    /// Check a precomputed character length
    #[inline]
    pub fn matches_len(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_LEN,
        }
    }
}
