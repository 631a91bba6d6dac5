//! Error types, one file per subsystem, unified under [`BanterError`].

mod config_error;
mod corpus_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the banter workspace.
#[derive(Debug, thiserror::Error)]
pub enum BanterError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type BanterResult<T> = Result<T, BanterError>;
