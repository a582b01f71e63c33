//! Word Scramble game engine
//!
//! Validation, round bookkeeping and the session that ties them to a word bank
//! and a dictionary backend.

mod round;
mod session;
pub mod spelling;
mod validation;

pub use round::{RoundState, ScoreState};
pub use session::{Accepted, GameSession, SessionConfig};
pub use spelling::{DEFAULT_LANGUAGE, Lexicon, SpellChecker};
pub use validation::{Rules, ValidationEngine};
