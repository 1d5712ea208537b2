//! Shared recommendation call contract
//!
//! Both recommendation strategies — the content-based engine in this
//! workspace and the external collaborative-filtering peer — expose the
//! same surface: three favorite titles in, up to `top_n` ranked titles
//! out. The UI layer selects a strategy through this trait and renders
//! typed failures per kind.

use crate::error::Result;

/// A recommendation strategy.
pub trait Recommender {
    /// Recommend up to `top_n` movie titles given exactly three favorite
    /// titles, ordered by descending relevance.
    ///
    /// # Errors
    ///
    /// - `TitleNotFound` when a favorite does not resolve in the working
    ///   subset
    /// - `InsufficientCandidates` when no eligible candidates remain
    /// - `InvalidRequest` when the favorites list is not exactly three
    ///   titles or `top_n` is zero
    fn recommend(&self, favorites: &[String], top_n: usize) -> Result<Vec<String>>;
}
