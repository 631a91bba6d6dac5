//! TF-IDF vectorization: weight = tf × idf with smoothed IDF
//! (ln((1 + n) / (1 + df)) + 1) and L2-normalized rows, so cosine similarity
//! between rows reduces to a dot product.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Term-weight matrix over a fixed document sequence.
///
/// One row per input document, in input order; columns follow the sorted
/// vocabulary, so output is exactly reproducible for a fixed input.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    rows: Vec<Vec<f64>>,
    vocab: Vec<String>,
}

impl TfidfMatrix {
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn vocab(&self) -> &[String] {
        &self.vocab
    }

    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }
}

/// Bag-of-words TF-IDF vectorizer with an injected stop-word set.
pub struct TfidfVectorizer {
    stop_words: HashSet<String>,
}

impl TfidfVectorizer {
    pub fn new(stop_words: impl IntoIterator<Item = String>) -> Self {
        Self {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    /// Build the weight matrix for pre-normalized token sequences.
    ///
    /// Vocabulary = distinct tokens across all documents minus stop words.
    /// tf = token count / document token total (stop words excluded from
    /// both); idf = ln((1 + n_docs) / (1 + df)) + 1. Rows are L2-normalized;
    /// a document with no vocabulary tokens gets an all-zero row.
    pub fn fit_transform(&self, documents: &[Vec<String>]) -> TfidfMatrix {
        let n_docs = documents.len();

        // Sorted vocabulary with per-token document frequency.
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in doc {
                if !self.stop_words.contains(token) && seen.insert(token.as_str()) {
                    *doc_freq.entry(token.as_str()).or_default() += 1;
                }
            }
        }

        let vocab: Vec<String> = doc_freq.keys().map(|t| t.to_string()).collect();
        let column: HashMap<&str, usize> = vocab
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();
        let idf: Vec<f64> = vocab
            .iter()
            .map(|t| {
                let df = doc_freq[t.as_str()] as f64;
                ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = documents
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; vocab.len()];
                let mut total = 0usize;
                for token in doc {
                    if let Some(&col) = column.get(token.as_str()) {
                        row[col] += 1.0;
                        total += 1;
                    }
                }
                if total == 0 {
                    return row;
                }
                for (col, weight) in row.iter_mut().enumerate() {
                    *weight = (*weight / total as f64) * idf[col];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        TfidfMatrix { rows, vocab }
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(input: &[&[&str]]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|d| d.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    fn no_stop() -> TfidfVectorizer {
        TfidfVectorizer::new(Vec::new())
    }

    #[test]
    fn vocabulary_is_sorted_and_deduplicated() {
        let m = no_stop().fit_transform(&docs(&[&["b", "a"], &["a", "c", "a"]]));
        assert_eq!(m.vocab(), ["a", "b", "c"]);
        assert_eq!(m.n_rows(), 2);
    }

    #[test]
    fn stop_words_are_excluded_from_the_vocabulary() {
        let v = TfidfVectorizer::new(vec!["the".to_string()]);
        let m = v.fit_transform(&docs(&[&["the", "sky"], &["the", "sea"]]));
        assert_eq!(m.vocab(), ["sea", "sky"]);
    }

    #[test]
    fn rows_are_unit_length() {
        let m = no_stop().fit_transform(&docs(&[&["dog", "cat"], &["dog", "dog", "bird"]]));
        for i in 0..m.n_rows() {
            let norm: f64 = m.row(i).iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "row {i} norm {norm}");
        }
    }

    #[test]
    fn empty_document_gets_a_zero_row() {
        let m = no_stop().fit_transform(&docs(&[&["dog"], &[]]));
        assert!(m.row(1).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn rare_terms_outweigh_common_terms() {
        // "dog" appears in both documents, "bird" only in the second.
        let m = no_stop().fit_transform(&docs(&[&["dog"], &["dog", "bird"]]));
        let bird = m.vocab().iter().position(|t| t == "bird").unwrap();
        let dog = m.vocab().iter().position(|t| t == "dog").unwrap();
        assert!(m.row(1)[bird] > m.row(1)[dog]);
    }

    #[test]
    fn deterministic_for_fixed_input() {
        let input = docs(&[&["a", "b"], &["b", "c"], &["c", "a", "a"]]);
        let m1 = no_stop().fit_transform(&input);
        let m2 = no_stop().fit_transform(&input);
        for i in 0..m1.n_rows() {
            assert_eq!(m1.row(i), m2.row(i));
        }
    }
}
