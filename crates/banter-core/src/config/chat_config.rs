use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Chat-surface configuration for the REPL collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Name the bot announces itself with.
    pub bot_name: String,
    /// UTF-8 text file sentence-tokenized into the corpus at startup.
    pub corpus_path: PathBuf,
    /// Utterances that end the session.
    pub exit_words: Vec<String>,
    /// Utterances acknowledged before exiting.
    pub thanks_words: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: defaults::DEFAULT_BOT_NAME.to_string(),
            corpus_path: PathBuf::from(defaults::DEFAULT_CORPUS_PATH),
            exit_words: defaults::DEFAULT_EXIT_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            thanks_words: defaults::DEFAULT_THANKS_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
