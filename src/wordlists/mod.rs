//! Word lists for Word Scramble
//!
//! Embedded root words and lexicon compiled into the binary, file loading,
//! and the `WordBank` that draws a root per round.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordSource};
pub use embedded::{LEXICON, LEXICON_COUNT, START, START_COUNT};
pub use loader::WordListError;
