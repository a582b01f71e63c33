//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised when a word list cannot be read
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list {} is unavailable", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no embedded word list for language '{language}'")]
    UnsupportedLanguage { language: String },
}

/// Parse word list text, one word per line
///
/// Entries are normalized; blank lines are skipped.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::SourceUnavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|source| WordListError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let words = parse_word_list(&content);
    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START;
///
/// let words = words_from_slice(START);
/// assert_eq!(words.len(), START.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|&s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}
