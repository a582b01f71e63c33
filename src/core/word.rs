//! Root word representation and submission normalization
//!
//! A `RootWord` stores the normalized word for a round along with its letter
//! multiset, so every submission is checked against the same counts.

use super::letters::LetterBag;
use std::fmt;

/// Normalize a raw submission: lower-case it and trim surrounding whitespace.
///
/// Applying it twice yields the same string as applying it once.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  SilK\n"), "silk");
/// assert_eq!(normalize(&normalize(" Worm ")), "worm");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Number of letters in a normalized word, as the player counts them.
#[inline]
#[must_use]
pub fn letter_len(word: &str) -> usize {
    word.chars().count()
}

/// The word a round is played against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    letters: LetterBag,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootWordError {
    #[error("Root word must contain at least one letter")]
    Empty,
}

impl RootWord {
    /// Fallback root used when the word bank has no candidates
    pub const FALLBACK: &'static str = "silkworm";

    /// Create a new root word, normalizing the input
    ///
    /// # Errors
    /// Returns `RootWordError::Empty` if nothing is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("  SILKWORM ").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, RootWordError> {
        let text = normalize(text.as_ref());
        if text.is_empty() {
            return Err(RootWordError::Empty);
        }

        let letters = LetterBag::from_word(&text);
        Ok(Self { text, letters })
    }

    /// The documented fallback root, always playable
    #[must_use]
    pub fn fallback() -> Self {
        let text = Self::FALLBACK.to_string();
        let letters = LetterBag::from_word(&text);
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter multiset of the root
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterBag {
        &self.letters
    }

    /// Number of letters in the root
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Check whether `word` can be spelled from this root's letters
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.letters.can_spell(word)
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
