//! Wordle Game - CLI
//!
//! Terminal word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::run_simple,
    config::{GameConfig, WordlistSource},
    game::{DEFAULT_MAX_ATTEMPTS, Rules, Session},
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word, one colored row at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a whitespace-separated file
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,

    /// Maximum attempts per game (0 = unlimited)
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for secret word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of the terminal
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(command, cli.log_file.as_deref(), cli.log_level)?;

    let config = GameConfig {
        wordlist: WordlistSource::from_arg(&cli.wordlist),
        rules: Rules::with_max_attempts(cli.max_attempts),
        seed: cli.seed,
    };

    let store = config.load_store();
    let mut rng = config.rng();
    let session = Session::start(&store, config.rules, &mut rng)
        .with_context(|| format!("cannot start a game with word list '{}'", cli.wordlist))?;
    info!("game started with {} words", store.len());

    match command {
        Commands::Play => run_tui(App::new(session, rng)),
        Commands::Simple => {
            let mut session = session;
            run_simple(&mut session, &mut rng, io::stdin().lock(), io::stdout().lock())
        }
    }
}

/// Configure `env_logger`
///
/// The TUI owns the terminal, so without a log file it logs nothing. `RUST_LOG`
/// overrides the level in every mode.
fn init_logging(command: Commands, log_file: Option<&Path>, level: LevelFilter) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    match (log_file, command) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        (None, Commands::Play) => return Ok(()),
        (None, Commands::Simple) => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();
    Ok(())
}
