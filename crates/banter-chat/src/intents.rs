//! Fixed intent-keyword tables: canonical intent name, trigger phrases,
//! candidate canned responses.
//!
//! Matching is exact and case-insensitive against the enumerated trigger
//! phrases. The retrieval core knows nothing about these tables.

use serde::{Deserialize, Serialize};

use banter_core::errors::ConfigError;

/// One intent: trigger phrases and the canned responses to pick from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub triggers: Vec<String>,
    pub responses: Vec<String>,
}

/// Ordered intent collection. First matching intent wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentTable {
    pub intents: Vec<Intent>,
}

impl IntentTable {
    /// Parse an intent table from TOML text, replacing the builtin set.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Exact case-insensitive match of the whole utterance against every
    /// trigger phrase.
    pub fn match_intent(&self, utterance: &str) -> Option<&Intent> {
        let lowered = utterance.trim().to_lowercase();
        self.intents
            .iter()
            .find(|intent| intent.triggers.iter().any(|t| t.to_lowercase() == lowered))
    }

    /// The intent named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// The builtin topic tables.
    pub fn builtin() -> Self {
        let intent = |name: &str, triggers: &[&str], responses: &[&str]| Intent {
            name: name.to_string(),
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            intents: vec![
                intent(
                    "greeting",
                    &["hello", "hi", "greetings", "sup", "what's up", "hey"],
                    &[
                        "hi",
                        "hey",
                        "*nods*",
                        "hi there",
                        "hello",
                        "I am glad! You are talking to me",
                    ],
                ),
                intent(
                    "general_knowledge",
                    &[
                        "tell me a fact",
                        "give me some knowledge",
                        "general knowledge",
                        "tell me something interesting",
                        "what's a fun fact?",
                        "do you know any trivia?",
                        "any random fact?",
                        "impress me",
                        "tell me something new",
                        "i want to learn something",
                        "educate me",
                        "fun fact please",
                        "share a fact",
                        "random gk",
                        "knowledge time",
                    ],
                    &[
                        "Did you know? The Eiffel Tower can be 15 cm taller during summer due to thermal expansion.",
                        "A group of flamingos is called a 'flamboyance'!",
                        "Bananas are berries, but strawberries aren't.",
                        "Octopuses have three hearts and blue blood.",
                        "The human brain uses about 20% of the body's energy.",
                        "Sharks existed before trees were on Earth.",
                        "Honey never spoils. Archaeologists found 3,000-year-old honey in Egyptian tombs that was still edible!",
                        "A bolt of lightning is five times hotter than the surface of the sun.",
                        "Wombat poop is cube-shaped!",
                        "The Great Wall of China is not visible from space with the naked eye — that's a myth.",
                    ],
                ),
                intent(
                    "ai",
                    &[
                        "tell me about ai",
                        "what is artificial intelligence",
                        "ai trivia",
                        "fact about machine learning",
                        "who invented ai",
                        "teach me ai",
                        "deep learning fact",
                    ],
                    &[
                        "Artificial Intelligence aims to make machines mimic human intelligence.",
                        "The term 'Artificial Intelligence' was coined in 1956 by John McCarthy.",
                        "Machine Learning allows computers to learn from data without being explicitly programmed.",
                        "Neural networks are inspired by the human brain and are the foundation of deep learning.",
                        "AI powers applications like Siri, Google Assistant, and ChatGPT!",
                        "In 1997, IBM's Deep Blue beat world chess champion Garry Kasparov.",
                    ],
                ),
                intent(
                    "networking",
                    &[
                        "networking fact",
                        "what is the internet",
                        "teach me networking",
                        "fact about IP",
                        "how wifi works",
                        "computer network trivia",
                    ],
                    &[
                        "The Internet is a massive network of networks that connects billions of devices worldwide.",
                        "IP addresses are like digital addresses — every device connected to the internet has one.",
                        "Wi-Fi uses radio waves to transmit data wirelessly.",
                        "TCP/IP is the communication protocol that the internet runs on.",
                        "The first email was sent over ARPANET, the predecessor of the modern internet.",
                        "A router connects different networks and directs traffic between them.",
                    ],
                ),
                intent(
                    "programming",
                    &[
                        "tell me a programming fact",
                        "give me a coding trivia",
                        "programming knowledge",
                        "teach me programming",
                        "fact about python",
                        "fact about java",
                        "how did programming start",
                        "tell me about code",
                    ],
                    &[
                        "Python was created by Guido van Rossum and released in 1991.",
                        "Java was originally developed by James Gosling at Sun Microsystems in 1995.",
                        "The first high-level programming language was Fortran, developed in the 1950s.",
                        "C, developed by Dennis Ritchie, was used to build the Unix operating system.",
                        "Whitespace is actually a programming language — its syntax is only spaces and tabs!",
                        "Programming is the art of telling computers what to do using logic and language.",
                    ],
                ),
                intent(
                    "cybersecurity",
                    &[
                        "teach me cybersecurity",
                        "fact about hacking",
                        "what is phishing",
                        "internet security tips",
                        "cyber trivia",
                        "fact about cyber attacks",
                    ],
                    &[
                        "Phishing is a cyber attack where attackers trick you into revealing personal information.",
                        "Cybersecurity involves protecting computers, servers, and networks from digital attacks.",
                        "Two-factor authentication adds an extra layer of security to your accounts.",
                        "A firewall monitors and controls incoming and outgoing network traffic.",
                        "The most common password in the world is still '123456'. Change it!",
                        "Ethical hackers help organizations find and fix security flaws.",
                    ],
                ),
                intent(
                    "operating_systems",
                    &[
                        "os trivia",
                        "fact about windows",
                        "what is linux",
                        "teach me about operating systems",
                        "role of os",
                        "who invented unix",
                    ],
                    &[
                        "An Operating System is software that manages hardware and software resources.",
                        "Linux is open-source and powers most web servers in the world.",
                        "Windows was first released in 1985 by Microsoft.",
                        "Unix, created in the 1970s at Bell Labs, is the foundation for many modern OSes.",
                        "An OS handles memory, processes, files, and device management.",
                        "macOS, Windows, and Linux are the three most common desktop OSes.",
                    ],
                ),
                intent(
                    "dsa",
                    &[
                        "fact about data structures",
                        "what is an algorithm",
                        "teach me sorting",
                        "cs fundamentals",
                        "binary tree trivia",
                        "stack vs queue",
                        "why are algorithms important",
                    ],
                    &[
                        "Data structures organize and store data efficiently for fast access and modification.",
                        "Stacks work on Last In First Out (LIFO), while Queues use First In First Out (FIFO).",
                        "Sorting algorithms like QuickSort and MergeSort help organize data in a logical order.",
                        "A binary tree has each node with up to two children — left and right.",
                        "Algorithms are step-by-step procedures used to solve problems efficiently.",
                        "Graphs are used to represent networks like maps or social connections.",
                    ],
                ),
            ],
        }
    }
}
