//! Greeting detection: a pass that fires when any single word of the
//! utterance is a greeting trigger, catching greetings embedded in longer
//! sentences that the exact-phrase intent match misses.

use crate::intents::IntentTable;

/// Returns the greeting intent's candidate responses when any word of
/// `utterance` equals one of its triggers, case-insensitively.
pub fn detect<'a>(table: &'a IntentTable, utterance: &str) -> Option<&'a [String]> {
    let greeting = table.get("greeting")?;
    let lowered = utterance.to_lowercase();
    for word in lowered.split_whitespace() {
        if greeting.triggers.iter().any(|t| t == word) {
            return Some(&greeting.responses);
        }
    }
    None
}
