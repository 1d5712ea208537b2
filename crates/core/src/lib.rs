//! # Movie Recs Core
//!
//! Shared kernel for the movie recommendation platform.
//!
//! This crate provides the building blocks used by the recommendation
//! engines: domain models and the read-only movie catalog, the error
//! taxonomy, configuration loading, vector math, and logging setup.
//!
//! ## Modules
//!
//! - `models`: Movie, credits, and tag records plus the `MovieCatalog`
//! - `error`: Error types and handling
//! - `config`: Configuration loading and validation
//! - `math`: Mathematical utilities for vector operations
//! - `telemetry`: Structured logging initialization
//! - `recommender`: The shared recommendation call contract

pub mod config;
pub mod error;
pub mod math;
pub mod models;
pub mod recommender;
pub mod telemetry;

// Re-export commonly used types
pub use config::{load_dotenv, ConfigLoader, ContentConfig};
pub use error::{RecsError, Result};
pub use math::{cosine_similarity, dot_product, normalize_vector, sparse_dot};
pub use models::{CreditsRecord, MovieCatalog, MovieRecord, TagRecord};
pub use recommender::Recommender;
pub use telemetry::init_logging;
