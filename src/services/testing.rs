//! Deterministic service doubles for tests

use super::{ServiceError, WordOracle, WordSource};
use crate::core::Word;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Hands out words in a fixed order, then reports an empty response
#[derive(Debug, Default)]
pub struct ScriptedSource {
    words: Mutex<VecDeque<Word>>,
}

impl ScriptedSource {
    pub fn new<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            words: Mutex::new(
                words
                    .into_iter()
                    .map(|w| Word::new(w.as_ref()).unwrap())
                    .collect(),
            ),
        }
    }
}

impl WordSource for ScriptedSource {
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        self.words
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ServiceError::EmptyResponse)
    }
}

/// Oracle whose transport always fails
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingOracle;

impl WordOracle for FailingOracle {
    async fn is_valid_word(&self, _candidate: &str) -> Result<bool, ServiceError> {
        Err(ServiceError::UnexpectedStatus {
            status: 503,
            url: "https://dictionary.invalid".to_string(),
        })
    }
}
