//! Letter multiset used by the anagram-subset check

use rustc_hash::FxHashMap;

/// Multiset of the characters of a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: FxHashMap<char, usize>,
    len: usize,
}

impl LetterBag {
    /// Count the characters of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut bag = Self::default();
        for ch in word.chars() {
            *bag.counts.entry(ch).or_insert(0) += 1;
            bag.len += 1;
        }
        bag
    }

    /// Total number of characters, duplicates included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many times `ch` appears
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Remove one occurrence of `ch`, returning false if none is left
    pub fn take(&mut self, ch: char) -> bool {
        match self.counts.get_mut(&ch) {
            Some(n) if *n > 0 => {
                *n -= 1;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether every character of `word` can be matched one-to-one
    /// against this bag
    ///
    /// Works on a copy: each character of `word` consumes one occurrence,
    /// and the first character with nothing left to consume fails the check.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterBag;
    ///
    /// let root = LetterBag::from_word("silkworm");
    /// assert!(root.can_spell("silk"));
    /// assert!(!root.can_spell("silks")); // only one 's'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|ch| remaining.take(ch))
    }
}

/// Anagram-subset check between a candidate and a root
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    LetterBag::from_word(root).can_spell(word)
}
