//! TUI application state and logic

use crate::engine::{GameSession, ScoreState, SpellChecker};
use crate::output::formatters::score_line;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Keep only this many messages on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: SpellChecker> {
    pub session: GameSession<S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals over the rounds finished in this run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_finished: usize,
    pub total_words: usize,
    /// Best finished round by letter count
    pub best_round: Option<(String, ScoreState)>,
}

impl Statistics {
    fn record(&mut self, root: &str, score: ScoreState) {
        self.rounds_finished += 1;
        self.total_words += score.word_count;

        let is_best = self
            .best_round
            .as_ref()
            .is_none_or(|(_, best)| score.letter_count > best.letter_count);
        if is_best && score.word_count > 0 {
            self.best_round = Some((root.to_string(), score));
        }
    }
}

impl<S: SpellChecker> App<S> {
    #[must_use]
    pub fn new(session: GameSession<S>) -> Self {
        let min_length = session.rules().min_length;

        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("Words must be longer than {min_length} letters."),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Submit the input buffer to the session
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            Ok(accepted) => {
                let text = format!("+{} {}", accepted.word, score_line(accepted.score));
                self.add_message(&text, MessageStyle::Success);
            }
            Err(reason) if reason.is_silent() => {}
            Err(reason) => {
                let message = reason.message(
                    self.session.root().text(),
                    self.session.rules().min_length,
                );
                self.add_message(&format!("{}: {message}", reason.title()), MessageStyle::Error);
            }
        }
    }

    /// Finish the current round and start another with a fresh root
    pub fn new_game(&mut self) {
        let finished = self.session.root().text().to_string();
        let score = self.session.score();
        self.stats.record(&finished, score);

        self.input_buffer.clear();
        self.messages.clear();
        let root = self.session.new_round().text().to_uppercase();
        self.add_message(
            &format!("New word: {root}. Last round: {}", score_line(score)),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SpellChecker>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SpellChecker>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Lexicon, Rules};
    use crate::wordlists::WordBank;

    fn app() -> App<Lexicon> {
        let bank = WordBank::new(vec!["silkworm".to_string()]);
        App::new(GameSession::from_bank(
            bank,
            Lexicon::embedded(),
            Rules::default(),
            Some(1),
        ))
    }

    fn press(app: &mut App<Lexicon>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<Lexicon>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_submits() {
        let mut app = app();
        type_word(&mut app, "silk");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.used_words(), ["silk"]);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
    }

    #[test]
    fn rejection_shows_error_message() {
        let mut app = app();
        type_word(&mut app, "silks");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Word not possible"));
        assert!(app.session.used_words().is_empty());
    }

    #[test]
    fn empty_submit_is_silent() {
        let mut app = app();
        let before = app.messages.len();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "   ");

        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn ctrl_n_starts_new_round_and_records_stats() {
        let mut app = app();
        type_word(&mut app, "silk");
        type_word(&mut app, "worms");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.session.used_words().is_empty());
        assert_eq!(app.stats.rounds_finished, 1);
        assert_eq!(app.stats.total_words, 2);
        assert_eq!(
            app.stats.best_round,
            Some((
                "silkworm".to_string(),
                ScoreState {
                    word_count: 2,
                    letter_count: 9,
                }
            ))
        );
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn empty_round_is_not_best() {
        let mut app = app();
        app.new_game();
        assert_eq!(app.stats.rounds_finished, 1);
        assert_eq!(app.stats.best_round, None);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
