//! Terminal output formatting
//!
//! Display utilities for the line-based game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_notification, print_score_result};
