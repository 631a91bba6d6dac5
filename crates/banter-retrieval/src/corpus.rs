//! Corpus index: the fixed ordered sentence sequence plus the scoped
//! per-query view that appends the live utterance as the final document.
//!
//! The corpus itself is never mutated after load. A query gets a borrowed
//! [`QueryScope`] whose document sequence is the corpus plus the query at
//! the end; when the scope is dropped nothing needs undoing, so every exit
//! path (success, no-match, failure) leaves the corpus untouched and all
//! retrieval indices stable.

use std::path::Path;

use banter_core::errors::CorpusError;

/// Ordered, immutable sentence collection retrieval runs against.
#[derive(Debug, Clone)]
pub struct Corpus {
    sentences: Vec<String>,
}

impl Corpus {
    /// Build a corpus from raw text: lowercase the whole text (queries are
    /// lowercased during normalization, so matching stays case-insensitive),
    /// then split into sentences at `.` `!` `?` boundaries.
    pub fn from_text(raw: &str) -> Result<Self, CorpusError> {
        let sentences = split_sentences(&raw.to_lowercase());
        if sentences.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        Ok(Self { sentences })
    }

    /// Build a corpus from an explicit sentence list (tests, embedded data).
    pub fn from_sentences(sentences: Vec<String>) -> Result<Self, CorpusError> {
        if sentences.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        Ok(Self { sentences })
    }

    /// Load and sentence-tokenize a UTF-8 corpus file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_text(&raw).map_err(|_| CorpusError::NoSentences {
            path: path.display().to_string(),
        })
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(String::as_str)
    }

    /// Scoped acquisition for one query: yields a view whose documents are
    /// the corpus sentences with `query` appended at the final position.
    pub fn with_query<'a>(&'a self, query: &'a str) -> QueryScope<'a> {
        QueryScope {
            corpus: self,
            query,
        }
    }
}

/// Borrowed per-query view: corpus sentences plus the query as the last
/// document. The appended position is tracked by index, never by value, so
/// a query that is character-identical to a corpus sentence cannot be
/// confused with the original occurrence.
pub struct QueryScope<'a> {
    corpus: &'a Corpus,
    query: &'a str,
}

impl<'a> QueryScope<'a> {
    /// All documents in order, the query last.
    pub fn documents(&self) -> impl Iterator<Item = &str> + '_ {
        self.corpus
            .sentences
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.query))
    }

    /// Position of the appended query document.
    pub fn query_index(&self) -> usize {
        self.corpus.len()
    }

    /// Total document count including the query.
    pub fn len(&self) -> usize {
        self.corpus.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Split text into trimmed sentences at `.` `!` `?` followed by whitespace
/// or end of input. Newlines without terminal punctuation also break
/// sentences, matching line-oriented corpus files.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            current.push(c);
            let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
            if at_boundary {
                push_sentence(&mut sentences, &mut current);
            }
        } else if c == '\n' {
            push_sentence(&mut sentences, &mut current);
        } else {
            current.push(c);
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
