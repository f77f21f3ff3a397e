//! Core domain types for Wordle
//!
//! This module contains the word type and the guess evaluator. Everything here
//! is pure: no I/O, no async, no shared state.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict, evaluate};
pub use word::{Word, WordError};

/// Number of letters in every target and guess
pub const WORD_LENGTH: usize = 5;

/// Number of scored attempts before a game is lost
pub const MAX_ATTEMPTS: usize = 6;
