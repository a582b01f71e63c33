//! Core domain types for Word Scramble
//!
//! Pure value types with no I/O: normalization, the root word, the letter
//! multiset behind the anagram check, and verdicts.

mod letters;
mod verdict;
mod word;

pub use letters::{LetterBag, is_possible};
pub use verdict::{Rejection, Verdict};
pub use word::{RootWord, RootWordError, letter_len, normalize};
