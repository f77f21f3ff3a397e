//! Word source that only hands out words the oracle recognises

use super::{ServiceError, WordOracle, WordSource};
use crate::core::Word;
use std::sync::Arc;
use tracing::{debug, warn};

/// Redraws from `source` until `oracle` accepts the word, at most `max_draws` times
///
/// A random word generator knows far more words than the dictionary used to
/// check guesses; without this a game could start with a word the player
/// would never be allowed to type.
#[derive(Debug)]
pub struct Verified<S, O> {
    source: S,
    oracle: Arc<O>,
    max_draws: usize,
}

impl<S, O> Verified<S, O> {
    #[must_use]
    pub fn new(source: S, oracle: Arc<O>, max_draws: usize) -> Self {
        Self {
            source,
            oracle,
            max_draws: max_draws.max(1),
        }
    }
}

impl<S, O> WordSource for Verified<S, O>
where
    S: WordSource + Sync,
    O: WordOracle + Send + Sync,
{
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        for draw in 1..=self.max_draws {
            let word = self.source.fetch_target_word().await?;

            match self.oracle.as_ref().is_valid_word(word.text()).await {
                Ok(true) => {
                    debug!(%word, draw, "target word verified");
                    return Ok(word);
                }
                Ok(false) => warn!(%word, draw, "word is not in the dictionary, drawing another"),
                Err(error) => {
                    // Same policy as guesses: an unreachable dictionary does not block play
                    warn!(%word, %error, "could not verify target word, using it anyway");
                    return Ok(word);
                }
            }
        }

        Err(ServiceError::Exhausted(self.max_draws))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::WordList;
    use crate::services::testing::{FailingOracle, ScriptedSource};

    #[tokio::test]
    async fn skips_words_unknown_to_the_dictionary() {
        let source = ScriptedSource::new(["qwxyz", "zzyzx", "crane"]);
        let oracle = Arc::new(WordList::parse("crane\nslate"));

        let verified = Verified::new(source, oracle, 5);
        assert_eq!(verified.fetch_target_word().await.unwrap().text(), "crane");
    }

    #[tokio::test]
    async fn gives_up_after_max_draws() {
        let source = ScriptedSource::new(["qwxyz", "zzyzx", "crane"]);
        let oracle = Arc::new(WordList::parse("crane"));

        let verified = Verified::new(source, oracle, 2);
        assert!(matches!(
            verified.fetch_target_word().await,
            Err(ServiceError::Exhausted(2))
        ));
    }

    #[tokio::test]
    async fn accepts_word_when_dictionary_is_unreachable() {
        let source = ScriptedSource::new(["qwxyz"]);
        let verified = Verified::new(source, Arc::new(FailingOracle), 3);
        assert_eq!(verified.fetch_target_word().await.unwrap().text(), "qwxyz");
    }

    #[tokio::test]
    async fn source_failure_propagates() {
        let source = ScriptedSource::new(Vec::<&str>::new());
        let oracle = Arc::new(WordList::parse("crane"));

        let verified = Verified::new(source, oracle, 3);
        assert!(matches!(
            verified.fetch_target_word().await,
            Err(ServiceError::EmptyResponse)
        ));
    }
}
