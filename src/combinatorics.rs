//! Combination and permutation enumerators
//!
//! Both enumerators work on indices only. Combinations are index sets into
//! the word set, grouped by size and lexicographic within a size.
//! Permutations are orderings of positions `0..k` within one combination,
//! in lexicographic order.

/// All non-empty subsets of `0..n`, by increasing size then lexicographically
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    pending: Option<Vec<usize>>,
}

impl Combinations {
    pub fn new(n: usize) -> Self {
        let pending = if n == 0 { None } else { Some(vec![0]) };
        Self { n, pending }
    }
}

/// Successor of `current` in size-then-lexicographic order
fn next_combination(current: &[usize], n: usize) -> Option<Vec<usize>> {
    let k = current.len();

    // Rightmost slot that can still move right
    if let Some(i) = (0..k).rev().find(|&i| current[i] < n - k + i) {
        let mut next = current.to_vec();
        next[i] += 1;
        for j in i + 1..k {
            next[j] = next[j - 1] + 1;
        }
        return Some(next);
    }

    if k < n {
        Some((0..=k).collect())
    } else {
        None
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        self.pending = next_combination(&current, self.n);
        Some(current)
    }
}

impl std::iter::FusedIterator for Combinations {}

/// Orderings of positions `0..k`.
///
/// With `permute` off only the identity ordering is produced, which lets the
/// driver treat both modes the same way.
#[derive(Debug, Clone)]
pub struct Permutations {
    permute: bool,
    pending: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(k: usize, permute: bool) -> Self {
        Self {
            permute,
            pending: Some((0..k).collect()),
        }
    }

    /// Start at the ordering with the given lexicographic rank.
    ///
    /// Unranks through the factorial number system, so no earlier ordering is
    /// visited. A rank past the last ordering yields an empty sequence.
    pub fn starting_at(k: usize, rank: u128, permute: bool) -> Self {
        if !permute {
            let pending = if rank == 0 { Some((0..k).collect()) } else { None };
            return Self { permute, pending };
        }

        Self {
            permute,
            pending: unrank_permutation(k, rank),
        }
    }
}

/// Lexicographic ordering of `0..k` with the given rank
pub fn unrank_permutation(k: usize, rank: u128) -> Option<Vec<usize>> {
    // Factorial-base digits, least significant (radix 1) last
    let mut digits = vec![0usize; k];
    let mut rest = rank;
    for radix in 1..=k {
        digits[k - radix] = (rest % radix as u128) as usize;
        rest /= radix as u128;
    }
    if rest > 0 {
        return None;
    }

    let mut pool: Vec<usize> = (0..k).collect();
    Some(digits.into_iter().map(|d| pool.remove(d)).collect())
}

/// Lexicographic successor of an ordering, or None after the last one
fn next_permutation(current: &[usize]) -> Option<Vec<usize>> {
    let k = current.len();
    if k < 2 {
        return None;
    }

    let pivot = (0..k - 1).rev().find(|&i| current[i] < current[i + 1])?;
    let swap = (pivot + 1..k).rev().find(|&j| current[j] > current[pivot])?;

    let mut next = current.to_vec();
    next.swap(pivot, swap);
    next[pivot + 1..].reverse();
    Some(next)
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        if self.permute {
            self.pending = next_permutation(&current);
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for Permutations {}
