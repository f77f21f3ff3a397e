//! External services the game depends on
//!
//! Two seams: a [`WordSource`] that picks the hidden word and a [`WordOracle`]
//! that decides whether a guess is a real word. Both are async and fallible;
//! what the game does with a failure is decided by the caller.

pub mod http;
mod verified;
mod wordlist;

#[cfg(test)]
pub(crate) mod testing;

pub use verified::Verified;
pub use wordlist::WordList;

use crate::core::{Word, WordError};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// Failure while talking to a word service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
    #[error("word service returned no words")]
    EmptyResponse,
    #[error("word service returned an unusable word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("no dictionary word found after {0} draws")]
    Exhausted(usize),
    #[error("word list is empty")]
    EmptyWordList,
}

/// Supplies the hidden word for a new game
pub trait WordSource {
    /// Fetch a lowercase five-letter word the oracle will also accept
    fn fetch_target_word(&self) -> impl Future<Output = Result<Word, ServiceError>> + Send;
}

/// Dictionary lookup for submitted guesses
pub trait WordOracle {
    /// Whether `candidate` (lowercase) is an accepted word
    fn is_valid_word(
        &self,
        candidate: &str,
    ) -> impl Future<Output = Result<bool, ServiceError>> + Send;
}

impl<T: WordSource + Send + Sync> WordSource for Arc<T> {
    fn fetch_target_word(&self) -> impl Future<Output = Result<Word, ServiceError>> + Send {
        self.as_ref().fetch_target_word()
    }
}

impl<T: WordOracle + Send + Sync> WordOracle for Arc<T> {
    fn is_valid_word(
        &self,
        candidate: &str,
    ) -> impl Future<Output = Result<bool, ServiceError>> + Send {
        self.as_ref().is_valid_word(candidate)
    }
}
