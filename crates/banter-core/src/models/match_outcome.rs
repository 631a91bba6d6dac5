use serde::{Deserialize, Serialize};

/// Result of matching a query against the corpus.
///
/// `NoMatch` is the sentinel for "nothing sufficiently similar" — a normal
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Best-scoring corpus sentence, by position in the original corpus.
    Match {
        index: usize,
        /// Cosine similarity in [0, 1].
        score: f64,
    },
    /// No corpus sentence scored above the threshold.
    NoMatch,
}

impl MatchOutcome {
    /// Selected corpus index, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Match { index, .. } => Some(*index),
            Self::NoMatch => None,
        }
    }

    /// Similarity score, if any.
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Match { score, .. } => Some(*score),
            Self::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}
