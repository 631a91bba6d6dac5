//! Response orchestrator: exit/thanks words → intent table → greeting scan
//! → retrieval → fixed fallback.

use tracing::debug;

use banter_core::config::ChatConfig;
use banter_core::constants::{FAREWELL_REPLY, NO_MATCH_REPLY, THANKS_REPLY};
use banter_core::models::Reply;
use banter_core::traits::IRandomSource;
use banter_retrieval::RetrievalEngine;

use crate::greeting;
use crate::intents::IntentTable;

/// Drives one utterance through the lookup stages and into the retrieval
/// engine when nothing canned applies.
pub struct Responder {
    intents: IntentTable,
    engine: RetrievalEngine,
    random: Box<dyn IRandomSource>,
    exit_words: Vec<String>,
    thanks_words: Vec<String>,
}

impl Responder {
    pub fn new(
        intents: IntentTable,
        engine: RetrievalEngine,
        random: Box<dyn IRandomSource>,
        config: &ChatConfig,
    ) -> Self {
        Self {
            intents,
            engine,
            random,
            exit_words: config.exit_words.iter().map(|w| w.to_lowercase()).collect(),
            thanks_words: config
                .thanks_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// Produce a reply for one utterance.
    pub fn respond(&mut self, utterance: &str) -> Reply {
        let lowered = utterance.trim().to_lowercase();

        if self.exit_words.iter().any(|w| *w == lowered) {
            return Reply::Farewell(FAREWELL_REPLY.to_string());
        }
        if self.thanks_words.iter().any(|w| *w == lowered) {
            return Reply::Farewell(THANKS_REPLY.to_string());
        }

        if let Some(intent) = self.intents.match_intent(&lowered) {
            debug!(intent = %intent.name, "intent matched");
            let pick = self.random.pick(intent.responses.len());
            if let Some(response) = intent.responses.get(pick) {
                return Reply::Canned(response.clone());
            }
        }

        if let Some(responses) = greeting::detect(&self.intents, &lowered) {
            debug!("greeting word detected");
            let pick = self.random.pick(responses.len());
            if let Some(response) = responses.get(pick) {
                return Reply::Canned(response.clone());
            }
        }

        match self.engine.retrieve(&lowered) {
            Some(sentence) => Reply::Retrieved(sentence),
            None => Reply::Fallback(NO_MATCH_REPLY.to_string()),
        }
    }
}
