//! # banter-core
//!
//! Foundation crate for the banter dialogue responder.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BanterConfig;
pub use errors::{BanterError, BanterResult};
pub use models::{MatchOutcome, Reply};
pub use traits::{ILemmatizer, IRandomSource};
