//! Dictionary checks
//!
//! Defines the `SpellChecker` capability and the lexicon-backed implementation.

use crate::core::normalize;
use crate::wordlists::LEXICON;
use crate::wordlists::loader::{WordListError, load_from_file};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Language code of the embedded lexicon
pub const DEFAULT_LANGUAGE: &str = "en";

/// Decides whether a string is a recognized word of a language
///
/// Implementations are expected to answer synchronously and deterministically.
/// A backend that is asynchronous or remote must block inside
/// `is_valid_word` so validation still yields a single verdict.
pub trait SpellChecker {
    /// Whether `word` is correctly spelled in `language`
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// A set of words for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    language: String,
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any words
    ///
    /// Entries are normalized the same way submissions are; blank entries are dropped.
    #[must_use]
    pub fn new<I, W>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self {
            language: language.into(),
            words: words
                .into_iter()
                .map(|word| normalize(word.as_ref()))
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// The English lexicon compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, LEXICON)
    }

    /// The embedded lexicon, if one exists for `language`
    ///
    /// # Errors
    ///
    /// Returns `WordListError::UnsupportedLanguage` for anything but
    /// `DEFAULT_LANGUAGE`; other languages need a dictionary file.
    pub fn embedded_for(language: &str) -> Result<Self, WordListError> {
        if language == DEFAULT_LANGUAGE {
            Ok(Self::embedded())
        } else {
            Err(WordListError::UnsupportedLanguage {
                language: language.to_string(),
            })
        }
    }

    /// Load a lexicon from a file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `WordListError::SourceUnavailable` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(
        language: impl Into<String>,
        path: P,
    ) -> Result<Self, WordListError> {
        Ok(Self::new(language, load_from_file(path)?))
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the normalized `word` is in the set, regardless of language
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate the words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Lexicon {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self.language == language && self.contains(word)
    }
}
