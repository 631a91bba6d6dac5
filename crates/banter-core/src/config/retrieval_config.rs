use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Tokens excluded from the TF-IDF vocabulary. Injected here rather than
    /// hardcoded in the engine so callers can supply a domain-specific set
    /// (or an empty one).
    pub stop_words: Vec<String>,
    /// Tokens shorter than this are dropped during normalization.
    pub min_token_len: usize,
    /// Best similarity at or below this value resolves to no-match.
    pub score_threshold: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            stop_words: defaults::DEFAULT_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
            score_threshold: defaults::DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl RetrievalConfig {
    /// A configuration with no stop words, useful for small test corpora
    /// where every token carries signal.
    pub fn without_stop_words() -> Self {
        Self {
            stop_words: Vec::new(),
            ..Self::default()
        }
    }
}
