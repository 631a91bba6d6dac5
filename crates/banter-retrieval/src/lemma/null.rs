use banter_core::traits::ILemmatizer;

/// Identity lemmatizer. Useful in tests and for corpora where
/// morphological collapsing is unwanted.
pub struct NullLemmatizer;

impl ILemmatizer for NullLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        token.to_string()
    }

    fn name(&self) -> &str {
        "null"
    }
}
