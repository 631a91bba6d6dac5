/// Token-to-base-form reduction provider.
///
/// The retrieval core only ever asks for one token at a time; how the
/// dictionary behind the implementation is acquired (embedded table,
/// file, remote resource) is the provider's business.
pub trait ILemmatizer: Send + Sync {
    /// Reduce a single lowercase token to its dictionary base form.
    fn lemmatize(&self, token: &str) -> String;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
