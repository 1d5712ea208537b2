//! Similarity ranking
//!
//! Resolves the user's favorite titles against the working subset,
//! scores every subset movie by cosine similarity to the seeds, and
//! selects the top candidates. Rows stay paired with movie identifiers
//! throughout; positions are an implementation detail of one build, not
//! a cross-reference key.

use crate::document::DocumentRow;
use crate::vectorize::TfidfMatrix;
use movie_recs_core::{RecsError, Result};
use ndarray::Array2;
use std::collections::HashSet;
use tracing::warn;

/// A ranked candidate, scored by aggregate similarity to the seeds.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMovie {
    pub movie_id: u32,
    pub title: String,
    pub score: f32,
}

/// Ranks subset movies against a set of seed titles.
///
/// Borrows the model pieces; the facade owns them and hands out views
/// per request.
pub struct SimilarityRanker<'a> {
    entries: &'a [DocumentRow],
    matrix: &'a TfidfMatrix,
}

impl<'a> SimilarityRanker<'a> {
    pub fn new(entries: &'a [DocumentRow], matrix: &'a TfidfMatrix) -> Self {
        debug_assert_eq!(entries.len(), matrix.num_rows());
        Self { entries, matrix }
    }

    /// Resolve a title to its first exactly-matching subset row.
    ///
    /// A title outside the bounded subset, or misspelled, cannot resolve
    /// and is a distinguishable error, never a silent wrong answer.
    pub fn resolve_title(&self, title: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.title == title)
            .ok_or_else(|| RecsError::TitleNotFound {
                title: title.to_string(),
            })
    }

    /// Cosine similarity of one seed row to every subset row.
    pub fn similarity_row(&self, seed: usize) -> Vec<f32> {
        (0..self.matrix.num_rows())
            .map(|i| self.matrix.row_similarity(seed, i))
            .collect()
    }

    /// Rank all non-seed movies by aggregate similarity to the seeds.
    ///
    /// Aggregation is the arithmetic mean of the per-seed similarity
    /// rows: every seed contributes equally and scores stay within
    /// [0, 1]. Ties are broken by original subset position, so the
    /// ranking is deterministic for a fixed corpus.
    ///
    /// Fewer than `top_n` eligible candidates degrades gracefully to the
    /// full eligible pool; an empty pool is an error.
    pub fn rank(&self, seed_titles: &[String], top_n: usize) -> Result<Vec<RankedMovie>> {
        let seed_indices: Vec<usize> = seed_titles
            .iter()
            .map(|title| self.resolve_title(title))
            .collect::<Result<_>>()?;

        let rows: Vec<Vec<f32>> = seed_indices
            .iter()
            .map(|&seed| self.similarity_row(seed))
            .collect();

        let seeds: HashSet<usize> = seed_indices.into_iter().collect();
        let num_seeds = rows.len() as f32;

        let mut candidates: Vec<(usize, f32)> = (0..self.matrix.num_rows())
            .filter(|i| !seeds.contains(i))
            .map(|i| {
                let aggregate = rows.iter().map(|row| row[i]).sum::<f32>() / num_seeds;
                (i, aggregate)
            })
            .collect();

        if candidates.is_empty() {
            return Err(RecsError::InsufficientCandidates {
                requested: top_n,
                available: 0,
            });
        }

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        if candidates.len() < top_n {
            warn!(
                requested = top_n,
                available = candidates.len(),
                "fewer candidates than requested, returning all available"
            );
        }
        candidates.truncate(top_n);

        Ok(candidates
            .into_iter()
            .map(|(i, score)| RankedMovie {
                movie_id: self.entries[i].movie_id,
                title: self.entries[i].title.clone(),
                score,
            })
            .collect())
    }
}

/// Dense pairwise similarity matrix over the whole vector space.
///
/// Quadratic in subset size; intended for small corpora and diagnostics.
/// The ranking path computes only the seed rows it needs.
pub fn pairwise_matrix(matrix: &TfidfMatrix) -> Array2<f32> {
    let n = matrix.num_rows();
    let mut similarities = Array2::<f32>::zeros((n, n));

    for i in 0..n {
        similarities[[i, i]] = if matrix.row(i).is_empty() { 0.0 } else { 1.0 };
        for j in (i + 1)..n {
            let sim = matrix.row_similarity(i, j);
            similarities[[i, j]] = sim;
            similarities[[j, i]] = sim;
        }
    }

    similarities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::TfidfVectorizer;

    fn model(docs: &[(&str, &str)]) -> (Vec<DocumentRow>, TfidfMatrix) {
        let entries: Vec<DocumentRow> = docs
            .iter()
            .enumerate()
            .map(|(i, (title, document))| DocumentRow {
                movie_id: i as u32 + 1,
                title: title.to_string(),
                document: document.to_string(),
            })
            .collect();

        let texts: Vec<String> = entries.iter().map(|e| e.document.clone()).collect();
        let matrix = TfidfVectorizer::new().fit_transform(&texts);
        (entries, matrix)
    }

    #[test]
    fn test_resolve_title_exact_match() {
        let (entries, matrix) = model(&[
            ("Toy Story (1995)", "adventure animation"),
            ("Heat (1995)", "action crime"),
        ]);
        let ranker = SimilarityRanker::new(&entries, &matrix);

        assert_eq!(ranker.resolve_title("Heat (1995)").unwrap(), 1);
        assert!(matches!(
            ranker.resolve_title("heat (1995)"),
            Err(RecsError::TitleNotFound { .. })
        ));
    }

    #[test]
    fn test_rank_excludes_seeds() {
        let (entries, matrix) = model(&[
            ("A", "action thriller heist"),
            ("B", "action thriller"),
            ("C", "romance musical"),
            ("D", "action heist"),
        ]);
        let ranker = SimilarityRanker::new(&entries, &matrix);

        let seeds = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let ranked = ranker.rank(&seeds, 10).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "D");
    }

    #[test]
    fn test_rank_mean_aggregation_uses_every_seed() {
        // E shares terms only with seed C; it must still score above the
        // fully unrelated F, which a first-seed-only aggregate would miss.
        let (entries, matrix) = model(&[
            ("A", "action heist"),
            ("B", "action chase"),
            ("C", "ballet dance"),
            ("E", "ballet dance recital"),
            ("F", "submarine documentary"),
        ]);
        let ranker = SimilarityRanker::new(&entries, &matrix);

        let seeds = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let ranked = ranker.rank(&seeds, 2).unwrap();

        let e = ranked.iter().find(|r| r.title == "E").unwrap();
        let f = ranked.iter().find(|r| r.title == "F").unwrap();
        assert!(e.score > f.score);
    }

    #[test]
    fn test_rank_tie_broken_by_subset_position() {
        let (entries, matrix) = model(&[
            ("Seed1", "western frontier"),
            ("Seed2", "western frontier"),
            ("Seed3", "western frontier"),
            ("X", "silent era"),
            ("Y", "silent era"),
        ]);
        let ranker = SimilarityRanker::new(&entries, &matrix);

        let seeds = vec![
            "Seed1".to_string(),
            "Seed2".to_string(),
            "Seed3".to_string(),
        ];
        let ranked = ranker.rank(&seeds, 2).unwrap();

        assert_eq!(ranked[0].title, "X");
        assert_eq!(ranked[1].title, "Y");
    }

    #[test]
    fn test_rank_empty_pool_is_an_error() {
        let (entries, matrix) = model(&[("A", "one"), ("B", "two"), ("C", "three")]);
        let ranker = SimilarityRanker::new(&entries, &matrix);

        let seeds = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let result = ranker.rank(&seeds, 5);

        assert!(matches!(
            result,
            Err(RecsError::InsufficientCandidates { available: 0, .. })
        ));
    }

    #[test]
    fn test_pairwise_matrix_is_symmetric_and_bounded() {
        let (_, matrix) = model(&[
            ("A", "action thriller"),
            ("B", "action comedy"),
            ("C", "ballet dance"),
        ]);

        let sims = pairwise_matrix(&matrix);
        for i in 0..3 {
            for j in 0..3 {
                let s = sims[[i, j]];
                assert!((0.0..=1.0).contains(&s), "similarity out of range: {s}");
                assert!((s - sims[[j, i]]).abs() < 1e-6);
            }
            assert!((sims[[i, i]] - 1.0).abs() < 1e-5);
        }
    }
}
