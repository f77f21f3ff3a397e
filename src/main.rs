//! Wordle - CLI
//!
//! Play Wordle in the terminal, either in a TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use wordle_game::{
    commands::{run_simple, score_guess},
    config::{DEFAULT_MAX_DRAWS, GameConfig},
    game::GameController,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::print_score_result,
    services::{
        WordOracle, WordSource,
        http::{DictionaryApi, RandomWordApi},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play offline with words from this file (one per line)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Base URL of the random word service
    #[arg(long, global = true, env = "WORDLE_WORD_API", default_value = RandomWordApi::DEFAULT_URL)]
    word_api: String,

    /// Base URL of the dictionary service
    #[arg(long, global = true, env = "WORDLE_DICTIONARY_API", default_value = DictionaryApi::DEFAULT_URL)]
    dictionary_api: String,

    /// Random words to try before giving up on finding a dictionary word
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DRAWS)]
    max_draws: usize,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout: u64,

    /// Log filter, e.g. 'info' or 'wordle_game=debug' (RUST_LOG takes precedence)
    #[arg(long, global = true, env = "WORDLE_LOG", default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a known target word
    Score {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            word_api: self.word_api.clone(),
            dictionary_api: self.dictionary_api.clone(),
            wordlist: self.wordlist.clone(),
            max_draws: self.max_draws,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }

    fn log_target(&self, command: &Commands) -> LogTarget {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            // The TUI owns the terminal
            (None, Commands::Play) => LogTarget::Discard,
            (None, _) => LogTarget::Stderr,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_tracing(&cli.log_level, cli.log_target(&command))?;

    let config = cli.config();
    let tui = matches!(command, Commands::Play);

    match command {
        Commands::Score { target, guess } => run_score_command(&target, &guess),
        Commands::Play | Commands::Simple => {
            if let Some(words) = config.offline_words().context("cannot read word list")? {
                anyhow::ensure!(!words.is_empty(), "word list contains no five-letter words");
                run_game(tui, Arc::clone(&words), words).await
            } else {
                let (source, dictionary) = config.online_services()?;
                run_game(tui, source, dictionary).await
            }
        }
    }
}

fn run_score_command(target: &str, guess: &str) -> Result<()> {
    let result = score_guess(target, guess)?;
    print_score_result(&result);
    Ok(())
}

async fn run_game<S, O>(tui: bool, source: S, oracle: Arc<O>) -> Result<()>
where
    S: WordSource,
    O: WordOracle + Send + Sync + 'static,
{
    if tui {
        run_play_command(source, oracle).await
    } else {
        run_simple(source, oracle).await
    }
}

async fn run_play_command<S, O>(source: S, oracle: Arc<O>) -> Result<()>
where
    S: WordSource,
    O: WordOracle + Send + Sync + 'static,
{
    println!("Picking a word...");
    let controller = GameController::start(source, oracle).await?;
    run_tui(App::new(controller)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["wordle_game"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.max_draws, DEFAULT_MAX_DRAWS);
        assert_eq!(cli.log_target(&Commands::Play), LogTarget::Discard);
        assert_eq!(cli.log_target(&Commands::Simple), LogTarget::Stderr);
    }

    #[test]
    fn score_subcommand_scores_the_guess() {
        let cli = Cli::try_parse_from(["wordle_game", "score", "crane", "train"]).unwrap();
        let Some(Commands::Score { target, guess }) = cli.command else {
            panic!("expected the score subcommand");
        };
        assert_eq!((target.as_str(), guess.as_str()), ("crane", "train"));
        assert!(run_score_command(&target, &guess).is_ok());
        assert!(run_score_command(&target, "cranes").is_err());
    }

    #[test]
    fn global_options_reach_the_config() {
        let cli = Cli::try_parse_from([
            "wordle_game",
            "simple",
            "--wordlist",
            "words.txt",
            "--max-draws",
            "3",
            "--timeout",
            "2",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.wordlist, Some(PathBuf::from("words.txt")));
        assert_eq!(config.max_draws, 3);
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }
}
