//! Lemmatizer providers.
//!
//! The engine only sees the [`ILemmatizer`] seam; these are the two
//! implementations shipped with the workspace.

mod dict;
mod null;

pub use dict::DictLemmatizer;
pub use null::NullLemmatizer;
