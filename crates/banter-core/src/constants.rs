/// Banter system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply when retrieval finds nothing with any shared vocabulary.
pub const NO_MATCH_REPLY: &str = "I am sorry! I don't understand you";

/// Reply to an exit word.
pub const FAREWELL_REPLY: &str = "Bye! take care..";

/// Reply to a thanks phrase.
pub const THANKS_REPLY: &str = "You are welcome..";

/// Banner printed when the REPL starts.
pub const WELCOME_REPLY: &str = "My name is Robo. I will answer your queries about Chatbots and Computer Science. If you want to exit, type Bye!";
