//! Events emitted by the game for whatever is drawing it

use crate::core::{Feedback, Word};

/// What changed after an input, for the presentation layer to redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    LetterAdded(char),
    LetterRemoved,
    /// Submit pressed with fewer than five letters typed
    GuessLengthError { len: usize },
    /// Guess is well-formed but not a recognised word; it stays editable
    InvalidWordRejected(Word),
    GuessScored(Feedback),
    GameWon { attempts: usize },
    GameLost { target: Word },
    SessionReset,
}
