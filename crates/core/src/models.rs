//! Domain models for the movie recommendation platform
//!
//! Source rows arrive from the external ingestion layer already parsed
//! into these records. The `MovieCatalog` is the read-only data context
//! handed to the engines at construction; nothing in this crate reads
//! files or databases.

use crate::error::{RecsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// A row of the movie table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Unique movie identifier
    pub movie_id: u32,
    /// Title including the parenthesized release year, e.g. "Toy Story (1995)"
    pub title: String,
    /// Pipe-delimited genre list, e.g. "Adventure|Animation|Children"
    pub genres: String,
}

/// Extended metadata row, left-joined onto movies by identifier.
///
/// Rows may be absent for some movies, and individual fields may be null
/// in the source; both degrade to empty features downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsRecord {
    pub movie_id: u32,
    /// Pipe-delimited lead cast list
    pub title_cast: Option<String>,
    pub director: Option<String>,
    /// Pipe-delimited plot keywords
    pub plot_keywords: Option<String>,
}

/// A free-text tag applied to a movie. A movie may have zero, one, or
/// many tag rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub movie_id: u32,
    pub tag: String,
    /// Irrelevant to ranking beyond preserving grouping order
    pub timestamp: DateTime<Utc>,
}

/// Read-only data context for the recommendation engines.
///
/// Built once from the immutable source tables and shared by reference;
/// engines never mutate it. Malformed movie rows (blank title) are
/// dropped at construction with a warning rather than failing the whole
/// load, but an empty catalog is fatal.
#[derive(Debug, Clone)]
pub struct MovieCatalog {
    movies: Vec<MovieRecord>,
    credits: HashMap<u32, CreditsRecord>,
    tags: Vec<TagRecord>,
}

impl MovieCatalog {
    pub fn new(
        movies: Vec<MovieRecord>,
        credits: Vec<CreditsRecord>,
        tags: Vec<TagRecord>,
    ) -> Result<Self> {
        let total = movies.len();
        let movies: Vec<MovieRecord> = movies
            .into_iter()
            .filter(|m| !m.title.trim().is_empty())
            .collect();

        let dropped = total - movies.len();
        if dropped > 0 {
            warn!(dropped, "dropped malformed movie rows with blank titles");
        }

        if movies.is_empty() {
            return Err(RecsError::data_integrity(
                "movie table is empty after dropping malformed rows",
            ));
        }

        let credits = credits.into_iter().map(|c| (c.movie_id, c)).collect();

        Ok(Self {
            movies,
            credits,
            tags,
        })
    }

    /// Movie rows in source order. Row order is the order the working
    /// subset is taken in, so it must stay stable for the catalog's
    /// lifetime.
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Extended metadata for one movie, if the source had a row for it.
    pub fn credits_for(&self, movie_id: u32) -> Option<&CreditsRecord> {
        self.credits.get(&movie_id)
    }

    /// All tag rows, in source order.
    pub fn tags(&self) -> &[TagRecord] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
