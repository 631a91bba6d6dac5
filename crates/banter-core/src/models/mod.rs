//! Plain data types shared across the workspace.

mod match_outcome;
mod reply;

pub use match_outcome::MatchOutcome;
pub use reply::Reply;
