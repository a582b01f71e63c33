//! Display functions for command results

use super::formatters::{create_progress_bar, score_line, word_badge};
use crate::commands::{HintResult, SurveyResult};
use colored::Colorize;

/// Print every playable word for a root
pub fn print_hint_result(result: &HintResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINTS FOR:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No playable words in the dictionary.".yellow());
        return;
    }

    let mut current_len = 0;
    for word in &result.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n{}", format!("{len} letters:").bright_cyan().bold());
        }
        println!("   {}", word_badge(word));
    }

    println!(
        "\n📊 Best possible round: {}",
        score_line(result.max_score).bright_yellow().bold()
    );
}

/// Print the ranking produced by a survey
pub fn print_survey_result(result: &SurveyResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", result.roots.len());
    println!("   Playable words:   {}", result.total_words);
    println!(
        "   Average per root: {}",
        format!("{:.1}", result.average_words()).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let best = result
        .roots
        .first()
        .map_or(0, |r| r.max_score.letter_count);

    println!("\n📈 {}", "Richest roots:".bright_cyan().bold());
    for entry in result.roots.iter().take(top) {
        let bar = create_progress_bar(entry.max_score.letter_count as f64, best as f64, 30);
        println!(
            "   {:<10} {} {}  longest: {}",
            entry.root.bright_white().bold(),
            bar.green(),
            score_line(entry.max_score),
            entry.longest.as_deref().unwrap_or("-")
        );
    }

    if !result.unplayable.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Unplayable roots:".red().bold(),
            result.unplayable.join(", ")
        );
    }
}
