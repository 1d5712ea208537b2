//! TF-IDF vectorization
//!
//! Builds a term-frequency–inverse-document-frequency vector space over
//! the composite documents of the working subset. Vocabulary order is
//! lexicographic and the whole operation is a pure function of the
//! document sequence, so a fixed corpus always yields the same space.

use movie_recs_core::sparse_dot;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Placeholder tokens that absent source fields can leak into documents.
/// They carry no signal and would otherwise score every sparse movie as
/// similar to every other sparse movie, so they are excluded from the
/// vocabulary outright rather than left to a stop-word list.
pub const DEFAULT_STOP_TOKENS: &[&str] = &["nan", "null", "none"];

/// Minimum token length, matching the word analyzer the document
/// pipeline was tuned against: single characters are noise.
const MIN_TOKEN_LEN: usize = 2;

/// A document's sparse TF-IDF row: `(term index, weight)` pairs sorted
/// ascending by term index, L2-normalized.
pub type SparseRow = Vec<(u32, f32)>;

/// The vector space over one document corpus.
///
/// Row i corresponds to document i of the input sequence; the pairing of
/// rows with movie identities is carried by the caller's document rows.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    rows: Vec<SparseRow>,
    vocabulary: Vec<String>,
}

impl TfidfMatrix {
    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &SparseRow {
        &self.rows[index]
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Vocabulary terms in index order (lexicographic).
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Cosine similarity between two rows, clamped to [0, 1].
    ///
    /// Rows are unit-length and non-negative, so the dot product is the
    /// cosine; clamping only absorbs floating-point drift.
    pub fn row_similarity(&self, a: usize, b: usize) -> f32 {
        sparse_dot(&self.rows[a], &self.rows[b]).clamp(0.0, 1.0)
    }
}

/// TF-IDF vectorizer with explicit stop-token filtering.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_tokens: HashSet<String>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            stop_tokens: DEFAULT_STOP_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Replace the stop-token set. Tokens are compared lowercased.
    pub fn with_stop_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Build the TF-IDF vector space for an ordered document sequence.
    ///
    /// Weighting: raw term frequency times smoothed inverse document
    /// frequency `ln((1 + n) / (1 + df)) + 1`, rows L2-normalized.
    pub fn fit_transform(&self, documents: &[String]) -> TfidfMatrix {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        // Vocabulary: every surviving term, lexicographic order for
        // deterministic column assignment.
        let mut terms: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        terms.sort_unstable();

        let term_index: HashMap<&str, u32> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i as u32))
            .collect();

        // Document frequency per term.
        let mut doc_freq = vec![0usize; terms.len()];
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                doc_freq[term_index[token] as usize] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let rows: Vec<SparseRow> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<u32, f32> = HashMap::new();
                for token in tokens {
                    *counts.entry(term_index[token.as_str()]).or_insert(0.0) += 1.0;
                }

                let mut row: SparseRow = counts
                    .into_iter()
                    .map(|(term, tf)| (term, tf * idf[term as usize]))
                    .collect();
                row.sort_unstable_by_key(|&(term, _)| term);

                let norm = row.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut row {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = terms.len(),
            "built tf-idf vector space"
        );

        TfidfMatrix {
            rows,
            vocabulary: terms,
        }
    }

    /// Lowercased word tokens: alphanumeric/underscore runs of at least
    /// two characters, minus the stop-token set.
    fn tokenize(&self, document: &str) -> Vec<String> {
        document
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .map(|token| token.to_lowercase())
            .filter(|token| !self.stop_tokens.contains(token))
            .collect()
    }
}
