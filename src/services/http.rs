//! HTTP-backed word services
//!
//! - [`RandomWordApi`]: random five-letter words (random-word-api.herokuapp.com)
//! - [`DictionaryApi`]: dictionary lookups (dictionaryapi.dev)

use super::{ServiceError, WordOracle, WordSource};
use crate::core::{WORD_LENGTH, Word};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Build the shared HTTP client used by both services
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn client(timeout: Duration) -> Result<Client, ServiceError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Random word generator API
#[derive(Debug, Clone)]
pub struct RandomWordApi {
    client: Client,
    base_url: String,
}

impl RandomWordApi {
    pub const DEFAULT_URL: &'static str = "https://random-word-api.herokuapp.com";

    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/word?length={WORD_LENGTH}&lang=en",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl WordSource for RandomWordApi {
    #[instrument(skip(self))]
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        let url = self.endpoint();
        let words: Vec<String> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(?words, "random word response");
        first_word(words)
    }
}

fn first_word(words: Vec<String>) -> Result<Word, ServiceError> {
    let word = words.into_iter().next().ok_or(ServiceError::EmptyResponse)?;
    Ok(Word::new(word)?)
}

/// One headword from a dictionary response; the definitions are ignored
#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
}

/// Free dictionary API
#[derive(Debug, Clone)]
pub struct DictionaryApi {
    client: Client,
    base_url: String,
}

impl DictionaryApi {
    pub const DEFAULT_URL: &'static str = "https://api.dictionaryapi.dev";

    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn entry_url(&self, candidate: &str) -> String {
        format!(
            "{}/api/v2/entries/en/{candidate}",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl WordOracle for DictionaryApi {
    #[instrument(skip(self))]
    async fn is_valid_word(&self, candidate: &str) -> Result<bool, ServiceError> {
        let url = self.entry_url(candidate);
        let response = self.client.get(&url).send().await?;
        if !classify_lookup(response.status(), &url)? {
            return Ok(false);
        }

        let entries: Vec<Entry> = response.json().await?;
        debug!(entries = entries.len(), "dictionary response");
        Ok(knows_word(&entries))
    }
}

/// Any returned headword counts; inflected forms come back under their lemma.
fn knows_word(entries: &[Entry]) -> bool {
    entries.iter().any(|entry| !entry.word.is_empty())
}

/// 2xx means the dictionary knows the word, 404 means it does not.
fn classify_lookup(status: StatusCode, url: &str) -> Result<bool, ServiceError> {
    if status.is_success() {
        Ok(true)
    } else if status == StatusCode::NOT_FOUND {
        Ok(false)
    } else {
        Err(ServiceError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_word_endpoint_requests_five_letters() {
        let api = RandomWordApi::new(Client::new(), "https://words.example/");
        assert_eq!(
            api.endpoint(),
            "https://words.example/word?length=5&lang=en"
        );
    }

    #[test]
    fn dictionary_entry_url() {
        let api = DictionaryApi::new(Client::new(), DictionaryApi::DEFAULT_URL);
        assert_eq!(
            api.entry_url("crane"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/crane"
        );
    }

    #[test]
    fn first_word_takes_head_of_response() {
        let word = first_word(vec!["Crane".into(), "slate".into()]).unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn first_word_rejects_empty_or_malformed_responses() {
        assert!(matches!(
            first_word(Vec::new()),
            Err(ServiceError::EmptyResponse)
        ));
        assert!(matches!(
            first_word(vec!["cranes".into()]),
            Err(ServiceError::InvalidWord(_))
        ));
    }

    #[test]
    fn empty_entry_list_is_unknown() {
        let crane = Entry {
            word: "crane".into(),
        };
        assert!(knows_word(&[crane]));
        assert!(!knows_word(&[]));
    }

    #[test]
    fn lookup_status_classification() {
        let url = "https://dict.example/api/v2/entries/en/crane";
        assert!(classify_lookup(StatusCode::OK, url).unwrap());
        assert!(!classify_lookup(StatusCode::NOT_FOUND, url).unwrap());
        assert!(matches!(
            classify_lookup(StatusCode::TOO_MANY_REQUESTS, url),
            Err(ServiceError::UnexpectedStatus { status: 429, .. })
        ));
    }
}
