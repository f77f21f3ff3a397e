//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use crate::game::Attempt;
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Render one letter as a colored tile, e.g. " C " on green
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// Best verdict seen so far for every guessed letter
///
/// Correct beats Present beats Absent, matching how an on-screen keyboard
/// colors keys.
#[must_use]
pub fn keyboard_hints(attempts: &[Attempt]) -> FxHashMap<char, Verdict> {
    let mut hints = FxHashMap::default();
    for attempt in attempts {
        for (letter, &verdict) in attempt.guess.text().chars().zip(attempt.feedback.verdicts()) {
            hints
                .entry(letter)
                .and_modify(|best: &mut Verdict| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
    }
    hints
}

/// "1 guess" / "3 guesses"
#[must_use]
pub fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
