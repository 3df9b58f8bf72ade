//! Wordle Clone - CLI
//!
//! Play Wordle in a TUI (default) or a plain text mode, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use rand::{SeedableRng, rngs::StdRng};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_clone::{
    commands::{run_simple, score_guess},
    game::{GameConfig, GameState},
    output::print_score_result,
    wordlists::{WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Number of guesses allowed per game (1-20)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = GameConfig::DEFAULT_MAX_GUESSES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=GameConfig::MAX_GUESSES_LIMIT as u64)
    )]
    max_guesses: usize,

    /// Report rejected commands as errors instead of ignoring them
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for target selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default) with an on-screen keyboard
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { guess, target } => {
            let result = score_guess(&guess, &target)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it only logs when a log file is given.
fn init_logging(verbose: bool, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());
    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        registry
            .with(
                fmt::layer()
                    .without_time()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if !tui {
        registry
            .with(fmt::layer().without_time().with_writer(io::stderr))
            .init();
    }

    Ok(())
}

/// Load the candidate words selected by the -w flag
///
/// - "builtin": the embedded list
/// - "<path>": one word per line from a file
fn load_wordlist(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "builtin" => Ok(WORDS.iter().map(|&word| word.to_string()).collect()),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn game_config(cli: &Cli) -> GameConfig {
    let config = GameConfig::new(cli.max_guesses);
    if cli.strict { config.strict() } else { config }
}

fn new_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn start_game(cli: &Cli) -> Result<(GameState, StdRng)> {
    let words = load_wordlist(&cli.wordlist)?;
    let mut rng = new_rng(cli.seed);
    let game = GameState::with_rng(&words, game_config(cli), &mut rng)
        .with_context(|| format!("cannot start a game with word list '{}'", cli.wordlist))?;
    Ok((game, rng))
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let (game, rng) = start_game(cli)?;
    run_tui(App::new(game, rng))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let (mut game, mut rng) = start_game(cli)?;
    run_simple(&mut game, &mut rng).context("simple mode I/O failed")
}
