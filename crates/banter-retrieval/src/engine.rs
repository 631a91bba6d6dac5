//! RetrievalEngine: owns the corpus and runs the per-query pipeline
//! normalize → query scope → vectorize → best match.

use std::sync::Arc;

use tracing::debug;

use banter_core::config::RetrievalConfig;
use banter_core::errors::RetrievalError;
use banter_core::models::MatchOutcome;
use banter_core::traits::ILemmatizer;

use crate::corpus::Corpus;
use crate::matcher;
use crate::normalize::Normalizer;
use crate::vectorize::TfidfVectorizer;

/// The retrieval engine. Stateless with respect to corpus content: every
/// query sees the same fixed sentence sequence, with the live utterance as
/// a transient final document inside the query scope.
pub struct RetrievalEngine {
    corpus: Corpus,
    normalizer: Normalizer,
    vectorizer: TfidfVectorizer,
    score_threshold: f64,
    /// Normalized corpus documents, cached at construction. Corpus sentences
    /// never change, so this is computed exactly once.
    corpus_tokens: Vec<Vec<String>>,
}

impl RetrievalEngine {
    /// Build an engine over `corpus`. An empty corpus is a configuration
    /// error: no queries could ever be served.
    pub fn new(
        corpus: Corpus,
        lemmatizer: Arc<dyn ILemmatizer>,
        config: &RetrievalConfig,
    ) -> Result<Self, RetrievalError> {
        if corpus.is_empty() {
            return Err(RetrievalError::EmptyCorpus);
        }

        let normalizer = Normalizer::new(lemmatizer, config.min_token_len);
        let corpus_tokens = corpus
            .sentences()
            .iter()
            .map(|s| normalizer.normalize(s))
            .collect();

        Ok(Self {
            corpus,
            normalizer,
            vectorizer: TfidfVectorizer::new(config.stop_words.iter().cloned()),
            score_threshold: config.score_threshold,
            corpus_tokens,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Best-matching corpus sentence for `utterance`, or `None` when nothing
    /// shares vocabulary with it (the no-match sentinel).
    pub fn retrieve(&self, utterance: &str) -> Option<String> {
        match self.retrieve_outcome(utterance) {
            MatchOutcome::Match { index, .. } => self.corpus.get(index).map(str::to_string),
            MatchOutcome::NoMatch => None,
        }
    }

    /// Full match outcome, with the selected corpus index and score.
    pub fn retrieve_outcome(&self, utterance: &str) -> MatchOutcome {
        // Step 1: Append the utterance as the final document for this query.
        let scope = self.corpus.with_query(utterance);
        let query_row = scope.query_index();

        // Step 2: Normalize. Corpus tokens are cached; only the live query
        // needs normalizing here.
        let mut documents = self.corpus_tokens.clone();
        documents.push(self.normalizer.normalize(utterance));

        // Step 3: Vectorize all documents, query row last.
        let matrix = self.vectorizer.fit_transform(&documents);

        // Step 4: Score and select, skipping the query's own row.
        let outcome = matcher::best_match(&matrix, query_row, self.score_threshold);
        debug!(
            query_row,
            vocab = matrix.vocab_len(),
            index = ?outcome.index(),
            score = ?outcome.score(),
            "retrieval outcome"
        );
        outcome
    }
}
