//! Letter multiset for composability checks
//!
//! A word is composable from the root when each of its letters can be taken
//! out of the root's letters one at a time, respecting multiplicity.

use rustc_hash::FxHashMap;

/// Remaining letters of a root word
///
/// Stores a count per character so duplicate letters are tracked exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from every character of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert_eq!(pool.count('k'), 1);
    /// assert_eq!(pool.len(), 8);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` remain
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters remaining
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Check if no letters remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove one copy of `letter`
    ///
    /// Returns `false` if none is left, leaving the pool unchanged.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a copy, so the pool itself is never consumed.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(!pool.can_spell("silkk"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }
}
