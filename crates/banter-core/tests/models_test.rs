//! MatchOutcome and Reply behavior.

use banter_core::models::{MatchOutcome, Reply};

#[test]
fn match_outcome_accessors() {
    let hit = MatchOutcome::Match {
        index: 2,
        score: 0.8,
    };
    assert_eq!(hit.index(), Some(2));
    assert_eq!(hit.score(), Some(0.8));
    assert!(hit.is_match());

    assert_eq!(MatchOutcome::NoMatch.index(), None);
    assert_eq!(MatchOutcome::NoMatch.score(), None);
    assert!(!MatchOutcome::NoMatch.is_match());
}

#[test]
fn match_outcome_serializes_round_trip() {
    let hit = MatchOutcome::Match {
        index: 1,
        score: 0.5,
    };
    let json = serde_json::to_string(&hit).unwrap();
    let back: MatchOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hit);
}

#[test]
fn reply_text_is_path_independent() {
    for reply in [
        Reply::Canned("hi".to_string()),
        Reply::Retrieved("hi".to_string()),
        Reply::Fallback("hi".to_string()),
        Reply::Farewell("hi".to_string()),
    ] {
        assert_eq!(reply.text(), "hi");
    }
}

#[test]
fn only_farewell_ends_the_session() {
    assert!(Reply::Farewell("bye".to_string()).ends_session());
    assert!(!Reply::Canned("hi".to_string()).ends_session());
    assert!(!Reply::Retrieved("x".to_string()).ends_session());
    assert!(!Reply::Fallback("x".to_string()).ends_session());
}
