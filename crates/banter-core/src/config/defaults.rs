//! Named default values backing the `Default` impls of the config structs.

/// Best similarity at or below this value resolves to the no-match outcome.
/// Exactly zero: with non-negative TF-IDF weights a cosine of 0.0 means no
/// shared vocabulary at all.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.0;

/// Tokens shorter than this are dropped during normalization.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 1;

/// Name the bot announces itself with.
pub const DEFAULT_BOT_NAME: &str = "Robo";

/// Corpus file consulted when no path is configured.
pub const DEFAULT_CORPUS_PATH: &str = "chatbot.txt";

/// Words that end the session.
pub const DEFAULT_EXIT_WORDS: &[&str] = &["bye"];

/// Phrases acknowledged with a you're-welcome reply before exiting.
pub const DEFAULT_THANKS_WORDS: &[&str] = &["thanks", "thank you"];

/// English stop words excluded from the TF-IDF vocabulary.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];
