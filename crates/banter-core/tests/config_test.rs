//! Config loading and default behavior.

use banter_core::config::{BanterConfig, ChatConfig, RetrievalConfig};

#[test]
fn defaults_are_sensible() {
    let config = BanterConfig::default();
    assert_eq!(config.chat.bot_name, "Robo");
    assert_eq!(config.retrieval.score_threshold, 0.0);
    assert_eq!(config.retrieval.min_token_len, 1);
    assert!(config.retrieval.stop_words.iter().any(|w| w == "the"));
    assert!(config.chat.exit_words.contains(&"bye".to_string()));
}

#[test]
fn without_stop_words_clears_only_the_stop_list() {
    let config = RetrievalConfig::without_stop_words();
    assert!(config.stop_words.is_empty());
    assert_eq!(config.score_threshold, RetrievalConfig::default().score_threshold);
}

#[test]
fn full_toml_overrides_every_field() {
    let config = BanterConfig::from_toml_str(
        r#"
        [retrieval]
        stop_words = ["foo"]
        min_token_len = 2
        score_threshold = 0.05

        [chat]
        bot_name = "Echo"
        corpus_path = "facts.txt"
        exit_words = ["quit", "exit"]
        thanks_words = ["ty"]
        "#,
    )
    .unwrap();

    assert_eq!(config.retrieval.stop_words, ["foo"]);
    assert_eq!(config.retrieval.min_token_len, 2);
    assert_eq!(config.retrieval.score_threshold, 0.05);
    assert_eq!(config.chat.bot_name, "Echo");
    assert_eq!(config.chat.corpus_path.to_str(), Some("facts.txt"));
    assert_eq!(config.chat.exit_words, ["quit", "exit"]);
}

#[test]
fn chat_defaults_cover_the_repl_surface() {
    let chat = ChatConfig::default();
    assert_eq!(chat.thanks_words, ["thanks", "thank you"]);
    assert_eq!(chat.corpus_path.to_str(), Some("chatbot.txt"));
}
