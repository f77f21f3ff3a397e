use super::Generation;
use crate::core::{WORD_LENGTH, WordError};
use crate::services::ServiceError;
use thiserror::Error;

/// Why a submission was not accepted by the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("guess must be exactly {expected} letters, got {len}")]
    WrongLength { len: usize, expected: usize },
    #[error("a guess is already being checked")]
    InFlight,
    #[error("the game is over")]
    GameOver,
    #[error("result belongs to game {pending}, current game is {current}")]
    Stale {
        pending: Generation,
        current: Generation,
    },
    #[error("no guess is being checked")]
    NotValidating,
    #[error(transparent)]
    Word(#[from] WordError),
}

impl SubmitError {
    pub(crate) const fn wrong_length(len: usize) -> Self {
        Self::WrongLength {
            len,
            expected: WORD_LENGTH,
        }
    }
}

/// Errors that stop a game from being played at all
#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not obtain a target word: {0}")]
    SourceUnavailable(#[source] ServiceError),
}
