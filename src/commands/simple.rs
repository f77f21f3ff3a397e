//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{GameController, KeyInput, Notification};
use crate::output::{print_board, print_notification};
use crate::services::{WordOracle, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Reveal,
    Guess(String),
    TooLong,
}

fn parse_line(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        "show" | "reveal" => Command::Reveal,
        _ if line.chars().count() > WORD_LENGTH => Command::TooLong,
        _ => Command::Guess(line),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin fails or no target word can be
/// obtained.
pub async fn run_simple<S, O>(source: S, oracle: std::sync::Arc<O>) -> anyhow::Result<()>
where
    S: WordSource,
    O: WordOracle + Send + Sync,
{
    println!("\n╔══════════════════════════════════════════╗");
    println!("║           Wordle - Simple Mode           ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {} tries.", crate::core::MAX_ATTEMPTS);
    println!("Commands: 'new' for a new game, 'show' to reveal the word, 'quit' to exit\n");

    let spinner = spinner("Picking a word...");
    let started = GameController::start(source, oracle).await;
    spinner.finish_and_clear();
    let mut game = started?;

    loop {
        if game.session().is_over() {
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    new_game(&mut game).await;
                    continue;
                }
                _ => break,
            }
        }

        let turn = game.session().attempts().len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{}", crate::core::MAX_ATTEMPTS))?;

        match parse_line(&input) {
            Command::Quit => break,
            Command::NewGame => new_game(&mut game).await,
            Command::Reveal => println!(
                "The word is {}",
                game.session().target().text().to_uppercase()
            ),
            Command::TooLong => {
                println!("❌ Your guess must be exactly {WORD_LENGTH} letters!");
            }
            Command::Guess(word) => {
                submit_line(&mut game, &word).await;
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Type a whole line into the session and submit it
async fn submit_line<S, O>(game: &mut GameController<S, O>, word: &str)
where
    S: WordSource,
    O: WordOracle + Send + Sync,
{
    for letter in word.chars() {
        match KeyInput::letter(letter) {
            Some(key) => {
                game.dispatch(key).await;
            }
            None => debug!(%letter, "skipping non-letter"),
        }
    }

    let spinner = spinner("Checking word...");
    let notification = game.dispatch(KeyInput::Submit).await;
    spinner.finish_and_clear();

    let Some(notification) = notification else {
        return;
    };

    if matches!(
        notification,
        Notification::GuessLengthError { .. } | Notification::InvalidWordRejected(_)
    ) {
        // A line cannot be edited in place, so start the next one clean
        while game.dispatch(KeyInput::Delete).await.is_some() {}
    } else {
        print_board(game.session());
    }
    print_notification(&notification, game.streak());
}

async fn new_game<S, O>(game: &mut GameController<S, O>)
where
    S: WordSource,
    O: WordOracle + Send + Sync,
{
    let spinner = spinner("Picking a word...");
    let reset = game.reset().await;
    spinner.finish_and_clear();

    match reset {
        Ok(notification) => print_notification(&notification, game.streak()),
        Err(error) => println!("❌ {error}"),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::WordList;
    use crate::services::testing::ScriptedSource;
    use std::sync::Arc;

    #[test]
    fn parse_line_commands() {
        assert_eq!(parse_line("QUIT"), Command::Quit);
        assert_eq!(parse_line(" new "), Command::NewGame);
        assert_eq!(parse_line("show"), Command::Reveal);
        assert_eq!(parse_line("Crane"), Command::Guess("crane".into()));
        assert_eq!(parse_line("cranes"), Command::TooLong);
        assert_eq!(parse_line("cr"), Command::Guess("cr".into()));
    }

    #[tokio::test]
    async fn rejected_line_leaves_an_empty_guess() {
        let mut game = GameController::start(
            ScriptedSource::new(["crane"]),
            Arc::new(WordList::parse("crane\ntrain")),
        )
        .await
        .unwrap();

        submit_line(&mut game, "xyzzy").await;
        assert_eq!(game.session().current_guess(), "");
        assert!(game.session().attempts().is_empty());

        submit_line(&mut game, "cr").await;
        assert_eq!(game.session().current_guess(), "");

        submit_line(&mut game, "train").await;
        assert_eq!(game.session().attempts().len(), 1);
    }
}
