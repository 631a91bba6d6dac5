use serde::{Deserialize, Serialize};

/// What the responder produced for one utterance, with the path it took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// A random pick from a matched intent's candidate responses.
    Canned(String),
    /// The best-matching corpus sentence.
    Retrieved(String),
    /// The fixed no-match message.
    Fallback(String),
    /// Session-ending reply (exit or thanks).
    Farewell(String),
}

impl Reply {
    /// The response text, whichever path produced it.
    pub fn text(&self) -> &str {
        match self {
            Self::Canned(s) | Self::Retrieved(s) | Self::Fallback(s) | Self::Farewell(s) => s,
        }
    }

    /// Whether this reply ends the session.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Farewell(_))
    }
}
