//! Visited-index bookkeeping for the repeat-avoiding random picker.
//!
//! A [`VisitSet`] is a growable bit set: one bit per catalog index, grown on
//! demand, so a picking cycle covers catalogs of any size.

use alloc::vec::Vec;

const WORD_BITS: usize = 64;

/// Growable bit set of visited catalog indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitSet {
    words: Vec<u64>,
}

fn locate(index: usize) -> (usize, u64) {
    let word = index / WORD_BITS;
    let bit = u32::try_from(index % WORD_BITS).unwrap_or(0);
    (word, 1u64.checked_shl(bit).unwrap_or(0))
}

impl VisitSet {
    /// Empty set.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Forget every visited index.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Mark `index` visited. Returns `true` if it was not visited before.
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, mask) = locate(index);
        if self.words.len() <= word {
            self.words.resize(word.saturating_add(1), 0);
        }
        match self.words.get_mut(word) {
            Some(w) => {
                let fresh = *w & mask == 0;
                *w |= mask;
                fresh
            }
            None => false,
        }
    }

    /// Whether `index` is marked visited.
    pub fn contains(&self, index: usize) -> bool {
        let (word, mask) = locate(index);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Number of visited indices below `limit`.
    pub fn count_below(&self, limit: usize) -> usize {
        let full = limit / WORD_BITS;
        let rem = u32::try_from(limit % WORD_BITS).unwrap_or(0);
        let whole: usize = self
            .words
            .iter()
            .take(full)
            .map(|w| w.count_ones() as usize)
            .sum();
        let partial = match (rem, self.words.get(full)) {
            (0, _) | (_, None) => 0,
            (rem, Some(w)) => {
                let mask = 1u64.checked_shl(rem).map_or(u64::MAX, |m| m.wrapping_sub(1));
                (w & mask).count_ones() as usize
            }
        };
        whole.saturating_add(partial)
    }

    /// `true` when every index in `0..limit` is visited.
    pub fn covers(&self, limit: usize) -> bool {
        self.count_below(limit) >= limit
    }

    /// The `n`-th (0-based) unvisited index below `limit`.
    pub fn nth_unvisited(&self, n: usize, limit: usize) -> Option<usize> {
        (0..limit).filter(|i| !self.contains(*i)).nth(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_fresh() {
        let mut set = VisitSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(3));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_grows_past_one_word() {
        let mut set = VisitSet::new();
        assert!(set.insert(200));
        assert!(set.contains(200));
        assert_eq!(set.count_below(201), 1);
        assert_eq!(set.count_below(200), 0);
    }

    #[test]
    fn test_covers_and_nth_unvisited() {
        let mut set = VisitSet::new();
        for i in [0, 1, 3] {
            set.insert(i);
        }
        assert!(!set.covers(4));
        assert_eq!(set.nth_unvisited(0, 4), Some(2));
        assert_eq!(set.nth_unvisited(1, 4), None);
        set.insert(2);
        assert!(set.covers(4));
    }

    #[test]
    fn test_count_below_word_boundary() {
        let mut set = VisitSet::new();
        for i in 0..64 {
            set.insert(i);
        }
        assert!(set.covers(64));
        assert!(!set.covers(65));
    }

    #[test]
    fn test_clear() {
        let mut set = VisitSet::new();
        set.insert(70);
        set.clear();
        assert!(!set.contains(70));
        assert_eq!(set.count_below(100), 0);
    }
}
