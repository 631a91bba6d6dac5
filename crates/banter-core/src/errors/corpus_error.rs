/// Corpus loading and indexing errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus is empty: no sentences to retrieve against")]
    EmptyCorpus,

    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus file {path} contains no sentences")]
    NoSentences { path: String },
}
