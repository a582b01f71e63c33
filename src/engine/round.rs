//! Round state
//!
//! The root word of the current round, the words accepted so far and the
//! score derived from them.

use crate::core::{RootWord, letter_len};

/// Running score of a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreState {
    /// Number of accepted words
    pub word_count: usize,
    /// Sum of the accepted words' lengths
    pub letter_count: usize,
}

impl ScoreState {
    /// Score of a list of accepted words
    #[must_use]
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w String>,
    {
        words.into_iter().fold(Self::default(), |score, word| score.with(word))
    }

    /// Score after accepting `word`
    #[must_use]
    pub fn with(self, word: &str) -> Self {
        Self {
            word_count: self.word_count + 1,
            letter_count: self.letter_count + letter_len(word),
        }
    }
}

/// One round: root, accepted words (most recent first) and score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root: RootWord,
    used_words: Vec<String>,
    score: ScoreState,
}

impl RoundState {
    /// Start a round on `root`
    #[must_use]
    pub const fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vec::new(),
            score: ScoreState {
                word_count: 0,
                letter_count: 0,
            },
        }
    }

    /// Replace the root and forget everything accepted so far
    pub fn reset(&mut self, root: RootWord) {
        tracing::info!(%root, previous = %self.root, "round reset");
        *self = Self::new(root);
    }

    /// Record a word that already passed validation against this round
    pub fn accept(&mut self, word: String) {
        self.score = self.score.with(&word);
        self.used_words.insert(0, word);
    }

    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> ScoreState {
        self.score
    }

    /// Whether `word` was accepted this round
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }
}
