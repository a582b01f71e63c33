//! Main game session interface

use super::round::{RoundState, ScoreState};
use super::spelling::SpellChecker;
use super::validation::{Rules, ValidationEngine};
use crate::core::{Rejection, RootWord};
use crate::wordlists::{WordBank, WordListError, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings for starting a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where root words come from
    pub words: WordSource,
    pub rules: Rules,
    /// Seed for root selection; `None` draws from the OS
    pub seed: Option<u64>,
}

/// A word accepted by `GameSession::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word as it was recorded
    pub word: String,
    /// Score after recording it
    pub score: ScoreState,
}

/// Word Scramble game session
///
/// Owns the word bank, the validator and the current round. Every submission
/// goes through validation before the round is touched.
pub struct GameSession<S: SpellChecker> {
    bank: WordBank,
    validator: ValidationEngine<S>,
    round: RoundState,
    rng: StdRng,
}

impl<S: SpellChecker> GameSession<S> {
    /// Load the word bank and start the first round
    ///
    /// # Errors
    ///
    /// Returns `WordListError::SourceUnavailable` if the word list cannot be
    /// read. Whether to fall back or abort is left to the caller.
    pub fn start(config: SessionConfig, spell_checker: S) -> Result<Self, WordListError> {
        let bank = WordBank::load(&config.words)?;
        tracing::info!(source = %config.words, candidates = bank.len(), "word bank loaded");

        Ok(Self::from_bank(bank, spell_checker, config.rules, config.seed))
    }

    /// Start a session on an already-loaded bank
    #[must_use]
    pub fn from_bank(bank: WordBank, spell_checker: S, rules: Rules, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let root = bank.pick_random(&mut rng);
        tracing::info!(%root, "round started");

        Self {
            bank,
            validator: ValidationEngine::new(spell_checker, rules),
            round: RoundState::new(root),
            rng,
        }
    }

    /// Draw a fresh root from the bank and reset the round
    pub fn new_round(&mut self) -> &RootWord {
        let root = self.bank.pick_random(&mut self.rng);
        self.round.reset(root);
        self.round.root()
    }

    /// Reset the round on a chosen root
    pub fn restart_with(&mut self, root: RootWord) {
        self.round.reset(root);
    }

    /// Validate a raw submission and record it if accepted
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` when any check fails; the round is left untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, RootWord};
    /// use word_scramble::engine::{GameSession, Lexicon, SessionConfig};
    ///
    /// let mut session = GameSession::start(SessionConfig::default(), Lexicon::embedded()).unwrap();
    /// session.restart_with(RootWord::new("silkworm").unwrap());
    ///
    /// let accepted = session.submit("Silk").unwrap();
    /// assert_eq!(accepted.word, "silk");
    /// assert_eq!(accepted.score.letter_count, 4);
    ///
    /// assert_eq!(session.submit("silk"), Err(Rejection::AlreadyUsed));
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<Accepted, Rejection> {
        let word = self
            .validator
            .validate(raw, self.round.root(), self.round.used_words())
            .into_result()?;

        self.round.accept(word.clone());
        let score = self.round.score();
        tracing::debug!(word, words = score.word_count, letters = score.letter_count, "word accepted");

        Ok(Accepted { word, score })
    }

    #[must_use]
    pub const fn root(&self) -> &RootWord {
        self.round.root()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.round.used_words()
    }

    #[must_use]
    pub const fn score(&self) -> ScoreState {
        self.round.score()
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        self.validator.rules()
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn spell_checker(&self) -> &S {
        self.validator.spell_checker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Lexicon;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn silkworm_session() -> GameSession<Lexicon> {
        let bank = WordBank::new(vec!["silkworm".to_string()]);
        GameSession::from_bank(bank, Lexicon::embedded(), Rules::default(), Some(1))
    }

    #[test]
    fn start_with_embedded_words() {
        let config = SessionConfig {
            seed: Some(5),
            ..SessionConfig::default()
        };
        let session = GameSession::start(config, Lexicon::embedded()).unwrap();

        assert!(
            session
                .bank()
                .candidates()
                .iter()
                .any(|w| w == session.root().text())
        );
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), ScoreState::default());
    }

    #[test]
    fn start_with_missing_file_fails() {
        let config = SessionConfig {
            words: WordSource::File(PathBuf::from("/nonexistent/word_scramble/start.txt")),
            ..SessionConfig::default()
        };
        let result = GameSession::start(config, Lexicon::embedded());
        assert!(matches!(
            result,
            Err(WordListError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn empty_bank_plays_fallback_root() {
        let session = GameSession::from_bank(
            WordBank::default(),
            Lexicon::embedded(),
            Rules::default(),
            Some(9),
        );
        assert_eq!(session.root().text(), RootWord::FALLBACK);
    }

    #[test]
    fn same_seed_same_roots() {
        let config = SessionConfig {
            seed: Some(1234),
            ..SessionConfig::default()
        };
        let mut a = GameSession::start(config.clone(), Lexicon::embedded()).unwrap();
        let mut b = GameSession::start(config, Lexicon::embedded()).unwrap();

        assert_eq!(a.root(), b.root());
        for _ in 0..5 {
            assert_eq!(a.new_round().clone(), b.new_round().clone());
        }
    }

    #[test]
    fn end_to_end_silkworm_round() {
        let mut session = silkworm_session();
        assert_eq!(session.root().text(), "silkworm");

        let accepted = session.submit("silk").unwrap();
        assert_eq!(accepted.word, "silk");
        assert_eq!(
            accepted.score,
            ScoreState {
                word_count: 1,
                letter_count: 4,
            }
        );

        assert_eq!(session.submit("silk"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.submit("xyz"), Err(Rejection::TooShort));
        assert_eq!(session.submit("silkworm"), Err(Rejection::SameAsRoot));
        assert_eq!(session.submit("silks"), Err(Rejection::NotPossible));
        assert_eq!(session.submit("silko"), Err(Rejection::NotAWord));
        assert_eq!(session.submit("   "), Err(Rejection::EmptyInput));

        assert_eq!(session.used_words(), ["silk"]);
        assert_eq!(session.score().word_count, 1);
    }

    #[test]
    fn duplicate_in_other_case_is_rejected() {
        let mut session = silkworm_session();
        session.submit("Worms").unwrap();
        assert_eq!(session.submit("WORMS"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.submit(" worms "), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn rejections_do_not_mutate_round() {
        let mut session = silkworm_session();
        session.submit("milk").unwrap();
        let before = session.round().clone();

        for raw in ["", "silkworm", "owl", "milk", "silks", "silko"] {
            assert!(session.submit(raw).is_err());
            assert_eq!(session.round(), &before);
        }
    }

    #[test]
    fn accepted_words_are_most_recent_first() {
        let mut session = silkworm_session();
        session.submit("silk").unwrap();
        session.submit("milk").unwrap();
        session.submit("worms").unwrap();

        assert_eq!(session.used_words(), ["worms", "milk", "silk"]);
        assert_eq!(
            session.score(),
            ScoreState {
                word_count: 3,
                letter_count: 13,
            }
        );
    }

    #[test]
    fn new_round_resets_words_and_score() {
        let mut session = silkworm_session();
        session.submit("silk").unwrap();
        session.submit("milk").unwrap();

        let root = session.new_round().clone();

        assert_eq!(root.text(), "silkworm");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), ScoreState::default());
        // A new round accepts previously used words again
        assert!(session.submit("silk").is_ok());
    }

    #[test]
    fn restart_with_changes_root() {
        let mut session = silkworm_session();
        session.submit("silk").unwrap();

        session.restart_with(RootWord::new("keyboard").unwrap());

        assert_eq!(session.root().text(), "keyboard");
        assert!(session.used_words().is_empty());
        assert_eq!(session.submit("silk"), Err(Rejection::NotPossible));
        assert!(session.submit("board").is_ok());
    }

    #[test]
    fn everyday_words_are_accepted_with_embedded_lexicon() {
        let mut session = silkworm_session();
        for word in ["rows", "irks", "rims"] {
            assert!(session.submit(word).is_ok(), "{word} refused");
        }

        session.restart_with(RootWord::new("mountain").unwrap());
        assert_eq!(session.submit("union").map(|a| a.word), Ok("union".to_string()));
        assert!(session.submit("amount").is_ok());
    }

    #[test]
    fn rules_are_exposed() {
        let session = silkworm_session();
        assert_eq!(session.rules(), &Rules::default());
    }

    proptest! {
        #[test]
        fn prop_score_tracks_accepted_words(inputs in prop::collection::vec(
            prop::sample::select(vec![
                "silk", "SILK", "milk", "worms", "slim", "soil", "roil", "owl", "",
                "silkworm", "silks", "silko", "swirl", "kilos", "zebra",
            ]),
            0..30,
        )) {
            let mut session = silkworm_session();
            let mut accepted = Vec::new();

            for raw in inputs {
                if let Ok(outcome) = session.submit(raw) {
                    accepted.push(outcome.word.clone());
                    prop_assert_eq!(outcome.score, session.score());
                }

                let score = session.score();
                prop_assert_eq!(score.word_count, accepted.len());
                prop_assert_eq!(score.letter_count, accepted.iter().map(String::len).sum::<usize>());
                prop_assert_eq!(score, ScoreState::from_words(session.used_words()));
            }

            let mut unique = session.used_words().to_vec();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), session.used_words().len());
        }
    }
}
