//! # banter-retrieval
//!
//! The retrieval engine: corpus normalization, TF-IDF vector-space indexing,
//! and cosine nearest-neighbor matching with a zero-score no-match fallback.
//!
//! Pipeline: utterance → [`Normalizer`] → [`Corpus::with_query`] →
//! [`TfidfVectorizer`] → [`matcher::best_match`] → sentence or no-match.

pub mod corpus;
pub mod engine;
pub mod lemma;
pub mod matcher;
pub mod normalize;
pub mod vectorize;

pub use corpus::{Corpus, QueryScope};
pub use engine::RetrievalEngine;
pub use lemma::{DictLemmatizer, NullLemmatizer};
pub use normalize::Normalizer;
pub use vectorize::{TfidfMatrix, TfidfVectorizer};
