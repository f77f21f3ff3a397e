//! Runtime configuration shared by all commands

use crate::services::http::{self, DictionaryApi, RandomWordApi};
use crate::services::{ServiceError, Verified, WordList};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Redraws allowed before giving up on finding a dictionary word
pub const DEFAULT_MAX_DRAWS: usize = 10;

/// Per-request timeout for the word services
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where words come from and how hard to try
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_api: String,
    pub dictionary_api: String,
    /// Play offline against this word list instead of the web services
    pub wordlist: Option<PathBuf>,
    pub max_draws: usize,
    pub request_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_api: RandomWordApi::DEFAULT_URL.to_string(),
            dictionary_api: DictionaryApi::DEFAULT_URL.to_string(),
            wordlist: None,
            max_draws: DEFAULT_MAX_DRAWS,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Online word services: random words checked against the dictionary
pub type OnlineServices = (Verified<RandomWordApi, DictionaryApi>, Arc<DictionaryApi>);

impl GameConfig {
    /// Build the web-backed word source and oracle
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn online_services(&self) -> Result<OnlineServices, ServiceError> {
        let client = http::client(self.request_timeout)?;
        let dictionary = Arc::new(DictionaryApi::new(client.clone(), &self.dictionary_api));
        let source = Verified::new(
            RandomWordApi::new(client, &self.word_api),
            Arc::clone(&dictionary),
            self.max_draws,
        );
        Ok((source, dictionary))
    }

    /// Load the offline word list, if one is configured
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn offline_words(&self) -> std::io::Result<Option<Arc<WordList>>> {
        self.wordlist
            .as_ref()
            .map(|path| WordList::load_from_file(path).map(Arc::new))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_online() {
        let config = GameConfig::default();
        assert!(config.wordlist.is_none());
        assert_eq!(config.word_api, RandomWordApi::DEFAULT_URL);
        assert_eq!(config.max_draws, DEFAULT_MAX_DRAWS);
        assert!(config.offline_words().unwrap().is_none());
    }

    #[test]
    fn offline_words_load_configured_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        let config = GameConfig {
            wordlist: Some(file.path().to_path_buf()),
            ..GameConfig::default()
        };
        let words = config.offline_words().unwrap().unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn online_services_build_without_network() {
        assert!(GameConfig::default().online_services().is_ok());
    }
}
