//! Property tests for the retrieval pipeline.

use std::sync::Arc;

use proptest::prelude::*;

use banter_core::config::RetrievalConfig;
use banter_retrieval::{Corpus, DictLemmatizer, Normalizer, RetrievalEngine};

fn normalizer() -> Normalizer {
    Normalizer::new(Arc::new(DictLemmatizer::builtin()), 1)
}

fn fixed_engine() -> RetrievalEngine {
    let corpus = Corpus::from_sentences(vec![
        "i like dogs.".to_string(),
        "i like cats.".to_string(),
        "the sky is blue.".to_string(),
    ])
    .unwrap();
    RetrievalEngine::new(
        corpus,
        Arc::new(DictLemmatizer::builtin()),
        &RetrievalConfig::without_stop_words(),
    )
    .unwrap()
}

proptest! {
    // Re-normalizing already-normalized text is a no-op.
    #[test]
    fn normalization_is_idempotent(s in ".{0,200}") {
        let n = normalizer();
        let once = n.normalize(&s);
        let twice = n.normalize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_tokens_are_lowercase_without_punctuation(s in ".{0,200}") {
        let n = normalizer();
        for token in n.normalize(&s) {
            prop_assert!(!token.chars().any(|c| c.is_ascii_punctuation()), "token {token:?}");
            prop_assert!(!token.chars().any(|c| c.is_ascii_uppercase()), "token {token:?}");
        }
    }

    // retrieve() twice in a row with no corpus mutation gives identical results.
    #[test]
    fn retrieval_is_deterministic(query in ".{0,100}") {
        let engine = fixed_engine();
        prop_assert_eq!(engine.retrieve_outcome(&query), engine.retrieve_outcome(&query));
    }

    // The corpus sequence is unchanged by any query.
    #[test]
    fn corpus_is_invariant_under_any_query(query in ".{0,100}") {
        let engine = fixed_engine();
        let before: Vec<String> = engine.corpus().sentences().to_vec();
        let _ = engine.retrieve(&query);
        prop_assert_eq!(engine.corpus().sentences(), before.as_slice());
    }

    // Any match must point at a real corpus position, never the query row.
    #[test]
    fn matches_point_into_the_corpus(query in ".{0,100}") {
        let engine = fixed_engine();
        if let Some(index) = engine.retrieve_outcome(&query).index() {
            prop_assert!(index < engine.corpus().len());
        }
    }

    // Scores are cosine values over non-negative weights.
    #[test]
    fn scores_are_within_unit_range(query in ".{0,100}") {
        let engine = fixed_engine();
        if let Some(score) = engine.retrieve_outcome(&query).score() {
            prop_assert!(score > 0.0 && score <= 1.0 + 1e-9, "score {score}");
        }
    }
}
