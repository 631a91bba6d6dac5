//! End-to-end responder flow over a small Computer Science corpus.

use std::sync::Arc;

use banter_chat::{IntentTable, Responder, SeededRandom};
use banter_core::config::{ChatConfig, RetrievalConfig};
use banter_core::constants::NO_MATCH_REPLY;
use banter_core::models::Reply;
use banter_retrieval::{Corpus, DictLemmatizer, RetrievalEngine};

const CORPUS_TEXT: &str = "\
A chatbot is a software application used to conduct an online chat conversation. \
Data structures organize and store data for efficient access. \
The internet is a global network of connected computers. \
Python is a popular programming language for machine learning.";

fn responder(stop_words: bool) -> Responder {
    let corpus = Corpus::from_text(CORPUS_TEXT).expect("corpus");
    let retrieval = if stop_words {
        RetrievalConfig::default()
    } else {
        RetrievalConfig::without_stop_words()
    };
    let engine = RetrievalEngine::new(corpus, Arc::new(DictLemmatizer::builtin()), &retrieval)
        .expect("engine");
    Responder::new(
        IntentTable::builtin(),
        engine,
        Box::new(SeededRandom::new(9)),
        &ChatConfig::default(),
    )
}

#[test]
fn intent_phrase_takes_priority_over_retrieval() {
    // "what is the internet" is a networking trigger AND has corpus overlap;
    // the intent table is consulted first.
    let reply = responder(true).respond("what is the internet");
    assert!(matches!(reply, Reply::Canned(_)), "got {reply:?}");
}

#[test]
fn corpus_question_is_answered_by_retrieval() {
    let reply = responder(true).respond("what is a chatbot");
    match reply {
        Reply::Retrieved(sentence) => assert!(sentence.contains("chatbot"), "{sentence:?}"),
        other => panic!("expected retrieval, got {other:?}"),
    }
}

#[test]
fn nonsense_gets_the_fixed_no_match_message() {
    assert_eq!(
        responder(false).respond("zzqx wwbb qqrr"),
        Reply::Fallback(NO_MATCH_REPLY.to_string())
    );
}

#[test]
fn session_survives_many_turns_without_corpus_drift() {
    let mut r = responder(true);
    for _ in 0..5 {
        let first = r.respond("what is a chatbot");
        let second = r.respond("what is a chatbot");
        assert_eq!(first, second);
    }
}

#[test]
fn farewell_ends_the_session() {
    let mut r = responder(true);
    assert!(!r.respond("what is a chatbot").ends_session());
    assert!(r.respond("bye").ends_session());
}
