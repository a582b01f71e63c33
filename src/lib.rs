//! Word Scramble
//!
//! A single-player word game: find as many words as you can using the letters
//! of a root word. Words must be real, longer than three letters, different
//! from the root, and new this round.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, RootWord};
//! use word_scramble::engine::{GameSession, Lexicon, SessionConfig};
//!
//! let mut session = GameSession::start(SessionConfig::default(), Lexicon::embedded()).unwrap();
//! session.restart_with(RootWord::new("silkworm").unwrap());
//!
//! let accepted = session.submit("silk").unwrap();
//! println!("{} letters so far", accepted.score.letter_count);
//!
//! assert_eq!(session.submit("silks"), Err(Rejection::NotPossible));
//! ```

// Core domain types
pub mod core;

// Validation, rounds and sessions
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
