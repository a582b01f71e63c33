//! Root word bank
//!
//! Holds the candidate root words for a session and draws one per round.

use super::START;
use super::loader::{WordListError, load_from_file, words_from_slice};
use crate::core::RootWord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::path::PathBuf;

/// Where root word candidates come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A plain-text file, one word per line
    File(PathBuf),
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Candidate root words, in list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    candidates: Vec<String>,
}

impl WordBank {
    /// Build a bank from already-loaded words
    #[must_use]
    pub const fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    /// Load the candidates from `source`
    ///
    /// # Errors
    ///
    /// Returns `WordListError::SourceUnavailable` if a file source cannot be read.
    /// The embedded source never fails.
    pub fn load(source: &WordSource) -> Result<Self, WordListError> {
        let candidates = match source {
            WordSource::Embedded => words_from_slice(START),
            WordSource::File(path) => load_from_file(path)?,
        };

        if candidates.is_empty() {
            tracing::warn!(%source, "word list is empty, rounds will use the fallback root");
        }

        Ok(Self { candidates })
    }

    /// Pick one candidate uniformly at random
    ///
    /// An empty bank yields `RootWord::fallback()` instead of failing.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::WordBank;
    ///
    /// let bank = WordBank::default();
    /// let root = bank.pick_random(&mut rand::rng());
    /// assert_eq!(root.text(), "silkworm");
    /// ```
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> RootWord {
        self.candidates
            .choose(rng)
            .and_then(|word| RootWord::new(word).ok())
            .unwrap_or_else(RootWord::fallback)
    }

    /// Candidate words in list order
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn embedded_source_loads() {
        let bank = WordBank::load(&WordSource::Embedded).unwrap();
        assert_eq!(bank.len(), START.len());
        assert!(bank.candidates().iter().any(|w| w == "silkworm"));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let source = WordSource::File(PathBuf::from("/nonexistent/word_scramble/start.txt"));
        let result = WordBank::load(&source);
        assert!(matches!(
            result,
            Err(WordListError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn empty_bank_picks_fallback() {
        let bank = WordBank::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(bank.pick_random(&mut rng), RootWord::fallback());
    }

    #[test]
    fn single_candidate_is_always_picked() {
        let bank = WordBank::new(vec!["keyboard".to_string()]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(bank.pick_random(&mut rng).text(), "keyboard");
        }
    }

    #[test]
    fn picks_come_from_the_bank() {
        let bank = WordBank::load(&WordSource::Embedded).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let root = bank.pick_random(&mut rng);
            assert!(bank.candidates().iter().any(|w| w == root.text()));
        }
    }

    #[test]
    fn same_seed_same_pick() {
        let bank = WordBank::load(&WordSource::Embedded).unwrap();
        let first = bank.pick_random(&mut StdRng::seed_from_u64(3));
        let second = bank.pick_random(&mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn picks_cover_the_bank() {
        let bank = WordBank::new(vec!["silkworm".to_string(), "keyboard".to_string()]);
        let mut rng = StdRng::seed_from_u64(11);
        let picks: Vec<String> = (0..64)
            .map(|_| bank.pick_random(&mut rng).text().to_string())
            .collect();
        assert!(picks.iter().any(|w| w == "silkworm"));
        assert!(picks.iter().any(|w| w == "keyboard"));
    }

    #[test]
    fn source_display() {
        assert_eq!(WordSource::Embedded.to_string(), "embedded list");
        assert_eq!(
            WordSource::File(PathBuf::from("words.txt")).to_string(),
            "words.txt"
        );
    }
}
