//! The banter REPL: load config and corpus, then a strict request/response
//! read loop until a farewell.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use banter_chat::{IntentTable, Responder, ThreadRandom};
use banter_core::config::BanterConfig;
use banter_core::constants::WELCOME_REPLY;
use banter_retrieval::{Corpus, DictLemmatizer, RetrievalEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = load_config()?;
    let corpus = Corpus::load(&config.chat.corpus_path).with_context(|| {
        format!(
            "failed to load corpus from {}",
            config.chat.corpus_path.display()
        )
    })?;
    info!(sentences = corpus.len(), "corpus loaded");

    let engine = RetrievalEngine::new(
        corpus,
        Arc::new(DictLemmatizer::builtin()),
        &config.retrieval,
    )
    .context("failed to build retrieval engine")?;

    let bot_name = config.chat.bot_name.clone();
    let mut responder = Responder::new(
        IntentTable::builtin(),
        engine,
        Box::new(ThreadRandom),
        &config.chat,
    );

    println!("{bot_name}: {WELCOME_REPLY}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let utterance = line.context("failed to read from stdin")?;
        let reply = responder.respond(&utterance);
        writeln!(stdout, "{bot_name}: {}", reply.text())?;
        stdout.flush()?;
        if reply.ends_session() {
            break;
        }
    }

    Ok(())
}

/// Read the config file named by `BANTER_CONFIG` when set; otherwise use
/// defaults (corpus at ./chatbot.txt).
fn load_config() -> anyhow::Result<BanterConfig> {
    match std::env::var_os("BANTER_CONFIG") {
        Some(path) => {
            let path = PathBuf::from(path);
            BanterConfig::load(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => Ok(BanterConfig::default()),
    }
}
