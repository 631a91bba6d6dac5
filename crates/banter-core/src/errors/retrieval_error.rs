/// Retrieval engine errors.
///
/// A query with nothing similar enough is NOT an error; it resolves to the
/// no-match outcome. These variants cover construction and internal
/// invariant failures only.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("cannot build a retrieval engine over an empty corpus")]
    EmptyCorpus,

    #[error("vectorization failed: {reason}")]
    VectorizeFailed { reason: String },
}
