//! Text normalization: lowercase, punctuation deletion, tokenization,
//! lemmatization.
//!
//! Punctuation is deleted, not replaced with whitespace, so adjacent words
//! merge only when punctuation sat between them with no space. Both the
//! corpus and live queries pass through the same normalizer, which is all
//! bag-of-words matching requires.

use std::sync::Arc;

use banter_core::traits::ILemmatizer;

/// Turns any string into a comparable sequence of base-form tokens.
pub struct Normalizer {
    lemmatizer: Arc<dyn ILemmatizer>,
    min_token_len: usize,
}

impl Normalizer {
    pub fn new(lemmatizer: Arc<dyn ILemmatizer>, min_token_len: usize) -> Self {
        Self {
            lemmatizer,
            min_token_len,
        }
    }

    /// Normalize `text` into an ordered token sequence.
    ///
    /// Pure: same input, same output. Empty or punctuation-only input
    /// yields an empty sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped: String = lowered
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        stripped
            .split_whitespace()
            .map(|t| self.lemmatizer.lemmatize(t))
            .filter(|t| !t.is_empty() && t.chars().count() >= self.min_token_len)
            .collect()
    }
}
