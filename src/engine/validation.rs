//! Submission validation
//!
//! Runs the fixed sequence of checks a submission must pass. The first failing
//! check decides the verdict and nothing is mutated along the way.

use super::spelling::{DEFAULT_LANGUAGE, SpellChecker};
use crate::core::{Rejection, RootWord, Verdict, letter_len, normalize};

/// Game rules applied by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Words must be strictly longer than this many letters
    pub min_length: usize,
    /// Language passed to the spell checker
    pub language: String,
}

impl Rules {
    /// Default threshold: words of 3 letters or fewer are refused
    pub const DEFAULT_MIN_LENGTH: usize = 3;

    #[must_use]
    pub fn new(min_length: usize, language: impl Into<String>) -> Self {
        Self {
            min_length,
            language: language.into(),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH, DEFAULT_LANGUAGE)
    }
}

/// Validates submissions against a root word
pub struct ValidationEngine<S: SpellChecker> {
    spell_checker: S,
    rules: Rules,
}

impl<S: SpellChecker> ValidationEngine<S> {
    /// Create a validator with the given dictionary backend and rules
    #[must_use]
    pub const fn new(spell_checker: S, rules: Rules) -> Self {
        Self {
            spell_checker,
            rules,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn spell_checker(&self) -> &S {
        &self.spell_checker
    }

    /// Validate a raw submission
    ///
    /// Checks, in order: empty input, same as root, too short, already used,
    /// spellable from the root's letters, recognized by the spell checker.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, RootWord, Verdict};
    /// use word_scramble::engine::{Lexicon, Rules, ValidationEngine};
    ///
    /// let engine = ValidationEngine::new(Lexicon::embedded(), Rules::default());
    /// let root = RootWord::new("silkworm").unwrap();
    ///
    /// assert_eq!(engine.validate(" Silk ", &root, &[]), Verdict::Accepted("silk".into()));
    /// assert_eq!(
    ///     engine.validate("silks", &root, &[]),
    ///     Verdict::Rejected(Rejection::NotPossible)
    /// );
    /// ```
    pub fn validate(&self, raw: &str, root: &RootWord, used: &[String]) -> Verdict {
        let word = normalize(raw);

        let verdict = match self.first_failure(&word, root, used) {
            Some(reason) => Verdict::Rejected(reason),
            None => Verdict::Accepted(word),
        };

        tracing::debug!(root = %root, raw, %verdict, "validated submission");
        verdict
    }

    fn first_failure(&self, word: &str, root: &RootWord, used: &[String]) -> Option<Rejection> {
        if word.is_empty() {
            return Some(Rejection::EmptyInput);
        }
        if word == root.text() {
            return Some(Rejection::SameAsRoot);
        }
        if letter_len(word) <= self.rules.min_length {
            return Some(Rejection::TooShort);
        }
        if used.iter().any(|w| w == word) {
            return Some(Rejection::AlreadyUsed);
        }
        if !root.can_spell(word) {
            return Some(Rejection::NotPossible);
        }
        if !self
            .spell_checker
            .is_valid_word(word, &self.rules.language)
        {
            return Some(Rejection::NotAWord);
        }
        None
    }
}
