//! Display functions for game state and command results

use super::formatters::{colored_guess, guesses_label, keyboard_hints, tile};
use crate::commands::ScoreResult;
use crate::core::{MAX_ATTEMPTS, Verdict};
use crate::game::{GameSession, Notification, Streak};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Print every scored row plus the letters used so far
pub fn print_board(session: &GameSession) {
    println!("\n{}", "─".repeat(40).cyan());
    for (i, attempt) in session.attempts().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}/{MAX_ATTEMPTS}", i + 1).bright_black(),
            colored_guess(&attempt.guess, &attempt.feedback)
        );
    }
    println!("{}", "─".repeat(40).cyan());

    let hints = keyboard_hints(session.attempts());
    for row in KEYBOARD_ROWS {
        let keys: String = row
            .chars()
            .map(|key| match hints.get(&key) {
                Some(&verdict) => tile(key, verdict).to_string(),
                None => format!(" {} ", key.to_ascii_uppercase()),
            })
            .collect();
        println!("  {keys}");
    }
    println!();
}

/// Print a short line describing what just happened
pub fn print_notification(notification: &Notification, streak: &Streak) {
    match notification {
        Notification::GuessLengthError { len } => {
            println!("{}", format!("❌ Your guess must be exactly 5 letters (got {len})").red());
        }
        Notification::InvalidWordRejected(word) => {
            println!(
                "{}",
                format!("❌ {} is not in the word list", word.text().to_uppercase()).red()
            );
        }
        Notification::GuessScored(feedback) => {
            println!("{feedback}  Try again!");
        }
        Notification::GameWon { attempts } => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format!("  🎉 You win in {}!", guesses_label(*attempts))
                    .bright_green()
                    .bold()
            );
            println!(
                "  Streak: {}  (best {})",
                streak.current().to_string().bright_cyan().bold(),
                streak.best()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        Notification::GameLost { target } => {
            println!(
                "\n{}",
                format!("Game over. The word was {}", target.text().to_uppercase())
                    .red()
                    .bold()
            );
            println!("  Streak reset to {}", streak.current());
        }
        Notification::SessionReset => println!("\n🔄 New game started!"),
        Notification::LetterAdded(_) | Notification::LetterRemoved => {}
    }
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} → {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        colored_guess(&result.guess, &result.feedback)
    );
    println!("{}", result.feedback);
    println!(
        "Correct: {}  Present: {}  Absent: {}",
        result.feedback.count(Verdict::Correct).to_string().green(),
        result.feedback.count(Verdict::Present).to_string().yellow(),
        result.feedback.count(Verdict::Absent)
    );
    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}
