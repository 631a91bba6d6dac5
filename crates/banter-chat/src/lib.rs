//! # banter-chat
//!
//! The collaborator boundary around the retrieval core: fixed
//! intent-keyword tables, greeting detection, and the response
//! orchestrator the REPL drives.

pub mod greeting;
pub mod intents;
pub mod random;
pub mod responder;

pub use intents::{Intent, IntentTable};
pub use random::{SeededRandom, ThreadRandom};
pub use responder::Responder;
