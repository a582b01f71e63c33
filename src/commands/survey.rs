//! Survey command
//!
//! Computes the best achievable score for every root in the word bank.

use super::hint::possible_words;
use crate::core::RootWord;
use crate::engine::{Lexicon, Rules, ScoreState};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Best achievable score for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSurvey {
    pub root: String,
    pub max_score: ScoreState,
    /// Longest playable word, if any
    pub longest: Option<String>,
}

/// Statistics over all surveyed roots
#[derive(Debug)]
pub struct SurveyResult {
    /// Ranked by letter count, then word count, then root
    pub roots: Vec<RootSurvey>,
    pub total_words: usize,
    pub unplayable: Vec<String>,
    pub duration: Duration,
}

impl SurveyResult {
    /// Average number of playable words per root
    #[must_use]
    pub fn average_words(&self) -> f64 {
        if self.roots.is_empty() {
            return 0.0;
        }
        self.total_words as f64 / self.roots.len() as f64
    }
}

/// Survey `roots` against `lexicon`
///
/// Roots are processed in parallel. Entries that are not valid root words are
/// skipped.
#[must_use]
pub fn run_survey(
    roots: &[String],
    lexicon: &Lexicon,
    rules: &Rules,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyResult {
    let roots: Vec<RootWord> = roots
        .iter()
        .take(limit.unwrap_or(roots.len()))
        .filter_map(|word| RootWord::new(word).ok())
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(roots.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let mut surveyed: Vec<RootSurvey> = roots
        .par_iter()
        .map(|root| {
            let words = possible_words(root, lexicon, rules);
            pb.inc(1);
            RootSurvey {
                root: root.text().to_string(),
                max_score: ScoreState::from_words(&words),
                longest: words.into_iter().next(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    surveyed.sort_by(|a, b| {
        b.max_score
            .letter_count
            .cmp(&a.max_score.letter_count)
            .then_with(|| b.max_score.word_count.cmp(&a.max_score.word_count))
            .then_with(|| a.root.cmp(&b.root))
    });

    let total_words: usize = surveyed.iter().map(|r| r.max_score.word_count).sum();
    let unplayable: Vec<String> = surveyed
        .iter()
        .filter(|r| r.max_score.word_count == 0)
        .map(|r| r.root.clone())
        .collect();

    tracing::info!(roots = surveyed.len(), total_words, ?duration, "survey finished");

    SurveyResult {
        roots: surveyed,
        total_words,
        unplayable,
        duration,
    }
}
