//! Wordle
//!
//! A terminal Wordle: duplicate-aware guess scoring, a turn-based game engine,
//! and pluggable word services (web APIs or an offline word list).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Verdict, Word, evaluate};
//!
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("train").unwrap();
//!
//! let feedback = evaluate(&target, &guess);
//! assert_eq!(feedback.count(Verdict::Correct), 2);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Game state machine and controller
pub mod game;

// Word source and dictionary services
pub mod services;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
