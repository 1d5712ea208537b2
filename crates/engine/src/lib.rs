//! Content-Based Movie Recommendation Engine
//!
//! Turns heterogeneous per-movie metadata (genres, cast, director, plot
//! keywords, free-text tags, release year) into composite text
//! documents, vectorizes them with TF-IDF, and ranks candidates by
//! cosine similarity to a three-title query.
//!
//! Pipeline: raw metadata tables → `normalize` → `document` → one
//! document per movie → `vectorize` → vector space → `similarity`
//! (given query titles) → ranked title list → `content` facade.
//!
//! The facade implements the shared [`movie_recs_core::Recommender`]
//! contract, which the external collaborative-filtering peer also
//! satisfies, so the UI layer can swap strategies freely.

pub mod content;
pub mod document;
pub mod normalize;
pub mod similarity;
pub mod vectorize;

// Re-export key types
pub use content::{ContentBasedEngine, ContentModel};
pub use document::{aggregate_tags, compose_documents, DocumentRow};
pub use similarity::{pairwise_matrix, RankedMovie, SimilarityRanker};
pub use vectorize::{TfidfMatrix, TfidfVectorizer, DEFAULT_STOP_TOKENS};

pub use movie_recs_core::{ContentConfig, Recommender, RecsError, Result};
