//! Cosine similarity matching: score the query row against every other row,
//! take the best non-self row, fall back to no-match at zero similarity.

use banter_core::models::MatchOutcome;

use crate::vectorize::TfidfMatrix;

/// Cosine similarity between two weight vectors.
///
/// Rows out of [`crate::TfidfVectorizer`] are already unit length, making
/// this a plain dot product; the norms are still divided out so the
/// function is correct for unnormalized input too. Either vector being
/// all-zero yields 0.0.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a <= f64::EPSILON || norm_b <= f64::EPSILON {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Select the corpus row most similar to the query row.
///
/// The query's own row is skipped explicitly (never selected, even when it
/// would be the maximum). Ties break to the first occurrence in corpus
/// order. A best score at or below `threshold` is the no-match outcome, as
/// is a matrix containing only the query row.
pub fn best_match(matrix: &TfidfMatrix, query_row: usize, threshold: f64) -> MatchOutcome {
    let query = matrix.row(query_row);

    let mut best: Option<(usize, f64)> = None;
    for index in 0..matrix.n_rows() {
        if index == query_row {
            continue;
        }
        let score = cosine(query, matrix.row(index));
        // Strict greater-than keeps the first occurrence on ties.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, score)) if score > threshold => MatchOutcome::Match { index, score },
        _ => MatchOutcome::NoMatch,
    }
}
