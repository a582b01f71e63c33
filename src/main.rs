//! Word Scramble - CLI
//!
//! Word game with TUI and text modes, plus hint and survey tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{hint_for, run_simple, run_survey},
    core::RootWord,
    engine::{DEFAULT_LANGUAGE, GameSession, Lexicon, Rules, SessionConfig},
    output::{print_hint_result, print_survey_result},
    wordlists::{WordBank, WordListError, WordSource},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'all' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    words: String,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Dictionary language code
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Words must be longer than this many letters
    #[arg(short = 'm', long, global = true, default_value_t = Rules::DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Seed for root word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one submission per line)
    Simple,

    /// List every playable word for a root
    Hint {
        /// Root word (default: a random one from the word list)
        root: Option<String>,
    },

    /// Rank all root words by their best possible round
    Survey {
        /// Limit number of roots to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// How many roots to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

impl Cli {
    fn word_source(&self) -> WordSource {
        match self.words.as_str() {
            "all" => WordSource::Embedded,
            path => WordSource::File(PathBuf::from(path)),
        }
    }

    fn rules(&self) -> Rules {
        Rules::new(self.min_length, self.language.clone())
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            words: self.word_source(),
            rules: self.rules(),
            seed: self.seed,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary selected by `--dictionary`
fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    match cli.dictionary.as_str() {
        "embedded" => Lexicon::embedded_for(&cli.language)
            .context("pass --dictionary with a word list for this language"),
        path => Lexicon::load(cli.language.clone(), path)
            .with_context(|| format!("cannot load dictionary '{path}'")),
    }
}

/// Start a session, falling back to the embedded root words if the list is unavailable
fn start_session(cli: &Cli, lexicon: Lexicon) -> Result<GameSession<Lexicon>> {
    let config = cli.session_config();

    match GameSession::start(config.clone(), lexicon.clone()) {
        Ok(session) => Ok(session),
        Err(err @ WordListError::SourceUnavailable { .. }) => {
            tracing::warn!(error = %err, "falling back to the embedded word list");
            let config = SessionConfig {
                words: WordSource::Embedded,
                ..config
            };
            GameSession::start(config, lexicon).context("cannot start a session")
        }
        Err(err) => Err(err).context("cannot start a session"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli)?;
    tracing::info!(words = lexicon.len(), language = lexicon.language(), "dictionary ready");

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli, lexicon),
        Some(Commands::Simple) => run_simple_command(&cli, lexicon),
        Some(Commands::Hint { root }) => run_hint_command(&cli, root.as_deref(), &lexicon),
        Some(Commands::Survey { limit, top }) => {
            run_survey_command(&cli, *limit, *top, &lexicon)
        }
    }
}

fn run_play_command(cli: &Cli, lexicon: Lexicon) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = start_session(cli, lexicon)?;
    run_tui(App::new(session))
}

fn run_simple_command(cli: &Cli, lexicon: Lexicon) -> Result<()> {
    let mut session = start_session(cli, lexicon)?;
    run_simple(&mut session).context("text mode I/O failed")
}

fn run_hint_command(cli: &Cli, root: Option<&str>, lexicon: &Lexicon) -> Result<()> {
    let root = match root {
        Some(word) => RootWord::new(word).context("invalid root word")?,
        None => {
            let bank = WordBank::load(&cli.word_source())?;
            match cli.seed {
                Some(seed) => {
                    use rand::SeedableRng;
                    bank.pick_random(&mut rand::rngs::StdRng::seed_from_u64(seed))
                }
                None => bank.pick_random(&mut rand::rng()),
            }
        }
    };

    let result = hint_for(&root, lexicon, &cli.rules());
    print_hint_result(&result);
    Ok(())
}

fn run_survey_command(
    cli: &Cli,
    limit: Option<usize>,
    top: usize,
    lexicon: &Lexicon,
) -> Result<()> {
    let bank = WordBank::load(&cli.word_source())?;

    println!("🎯 Surveying {} root words...", limit.unwrap_or(bank.len()).min(bank.len()));
    let result = run_survey(bank.candidates(), lexicon, &cli.rules(), limit, true);
    print_survey_result(&result, top);
    Ok(())
}
