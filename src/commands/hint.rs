//! Hint command
//!
//! Lists every word of the lexicon that would be accepted against a root.

use crate::core::RootWord;
use crate::engine::{Lexicon, Rules, ScoreState, SpellChecker, ValidationEngine};

/// All playable words for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score of a round that found every word
    pub max_score: ScoreState,
}

/// Words a fresh round on `root` would accept, longest first then alphabetical
///
/// # Examples
/// ```
/// use word_scramble::commands::possible_words;
/// use word_scramble::core::RootWord;
/// use word_scramble::engine::{Lexicon, Rules};
///
/// let root = RootWord::new("silkworm").unwrap();
/// let words = possible_words(&root, &Lexicon::embedded(), &Rules::default());
/// assert!(words.contains(&"silk".to_string()));
/// assert!(!words.contains(&"silkworm".to_string()));
/// ```
#[must_use]
pub fn possible_words(root: &RootWord, lexicon: &Lexicon, rules: &Rules) -> Vec<String> {
    let validator = ValidationEngine::new(
        |word: &str, language: &str| lexicon.is_valid_word(word, language),
        rules.clone(),
    );

    let mut words: Vec<String> = lexicon
        .words()
        .filter_map(|word| validator.validate(word, root, &[]).into_result().ok())
        .collect();

    words.sort_unstable_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
    words
}

/// Build the hint for `root`
#[must_use]
pub fn hint_for(root: &RootWord, lexicon: &Lexicon, rules: &Rules) -> HintResult {
    let words = possible_words(root, lexicon, rules);
    let max_score = ScoreState::from_words(&words);

    HintResult {
        root: root.text().to_string(),
        words,
        max_score,
    }
}
