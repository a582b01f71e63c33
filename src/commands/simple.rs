//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: every line is a submission, lines starting
//! with ':' are commands.

use crate::engine::{GameSession, SpellChecker};
use crate::output::formatters::{score_line, word_badge};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: SpellChecker>(session: &mut GameSession<S>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, stdin.lock(), stdout.lock())
}

/// Drive a session from `input`, writing everything to `out`
///
/// Stops at end of input or on `:quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<S, R, W>(session: &mut GameSession<S>, input: R, mut out: W) -> io::Result<()>
where
    S: SpellChecker,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Text Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Make words longer than {} letters from the root word.",
        session.rules().min_length
    )?;
    writeln!(out, "Commands: ':new' for a new word, ':words' to list, ':quit' to exit\n")?;
    print_root(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if handle_line(session, &line, &mut out)? == Flow::Quit {
            return Ok(());
        }
        out.flush()?;
    }

    print_summary(session, &mut out)
}

fn handle_line<S: SpellChecker, W: Write>(
    session: &mut GameSession<S>,
    line: &str,
    out: &mut W,
) -> io::Result<Flow> {
    match line.trim() {
        ":quit" | ":q" | ":exit" => {
            print_summary(session, out)?;
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(Flow::Quit);
        }
        ":new" | ":n" => {
            print_summary(session, out)?;
            session.new_round();
            writeln!(out, "\n🔄 New word!\n")?;
            print_root(session, out)?;
        }
        ":words" | ":w" => {
            if session.used_words().is_empty() {
                writeln!(out, "No words yet.")?;
            }
            for word in session.used_words() {
                writeln!(out, "  {}", word_badge(word))?;
            }
        }
        _ => match session.submit(line) {
            Ok(accepted) => {
                writeln!(
                    out,
                    "{} {}   {}",
                    "✓".green().bold(),
                    word_badge(&accepted.word).bright_white().bold(),
                    score_line(accepted.score).bright_black()
                )?;
            }
            Err(reason) if reason.is_silent() => {}
            Err(reason) => {
                let message = reason.message(session.root().text(), session.rules().min_length);
                writeln!(
                    out,
                    "{} {}: {}",
                    "✗".red().bold(),
                    reason.title().yellow().bold(),
                    message
                )?;
            }
        },
    }

    Ok(Flow::Continue)
}

fn print_root<S: SpellChecker, W: Write>(session: &GameSession<S>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        session.root().text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

fn print_summary<S: SpellChecker, W: Write>(
    session: &GameSession<S>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "\nRound over for {}: {}",
        session.root().text().to_uppercase(),
        score_line(session.score())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::engine::{Lexicon, Rules};
    use crate::wordlists::WordBank;

    fn silkworm_session() -> GameSession<Lexicon> {
        let bank = WordBank::new(vec!["silkworm".to_string()]);
        GameSession::from_bank(bank, Lexicon::embedded(), Rules::default(), Some(1))
    }

    fn play(session: &mut GameSession<Lexicon>, input: &str) -> String {
        let mut out = Vec::new();
        play_lines(session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn submissions_update_session() {
        let mut session = silkworm_session();
        let output = play(&mut session, "silk\nworms\n");

        assert_eq!(session.used_words(), ["worms", "silk"]);
        assert!(output.contains("SILKWORM"));
        assert!(output.contains("2 words"));
    }

    #[test]
    fn rejections_are_reported() {
        let mut session = silkworm_session();
        let output = play(&mut session, "silk\nsilk\nsilks\nsilko\nowl\nsilkworm\n");

        assert!(output.contains("Word used already"));
        assert!(output.contains("Word not possible"));
        assert!(output.contains("Word not recognized"));
        assert!(output.contains("Word too short"));
        assert!(output.contains("Be more original"));
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn empty_lines_are_silent() {
        let mut session = silkworm_session();
        let output = play(&mut session, "\n   \n");

        assert!(!output.contains('✗'));
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = silkworm_session();
        let output = play(&mut session, "silk\n:quit\nmilk\n");

        assert_eq!(session.used_words(), ["silk"]);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn new_round_resets_words() {
        let mut session = silkworm_session();
        play(&mut session, "silk\n:new\n");

        assert!(session.used_words().is_empty());
        assert_eq!(session.root(), &RootWord::new("silkworm").unwrap());
    }

    #[test]
    fn words_command_lists_accepted() {
        let mut session = silkworm_session();
        let output = play(&mut session, "milk\n:words\n");

        assert!(output.contains("(4) milk"));
    }
}
