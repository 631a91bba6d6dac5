//! Trait seams between the retrieval core and its collaborators.

mod lemmatizer;
mod random_source;

pub use lemmatizer::ILemmatizer;
pub use random_source::IRandomSource;
