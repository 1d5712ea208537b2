//! Content-based recommendation facade
//!
//! The single entry point the UI layer calls: three favorite titles in,
//! up to `top_n` ranked titles out. Owns the build-once, read-many model
//! cache; the vector space is expensive to build, so it is constructed
//! on first use and shared immutably by every subsequent request.

use crate::document::{compose_documents, DocumentRow};
use crate::similarity::SimilarityRanker;
use crate::vectorize::{TfidfMatrix, TfidfVectorizer};
use movie_recs_core::{
    ConfigLoader, ContentConfig, MovieCatalog, Recommender, RecsError, Result,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::info;

const NUM_FAVORITES: usize = 3;

/// The derived model for one catalog + configuration: the working
/// subset's document rows and their TF-IDF vector space. Immutable once
/// built.
#[derive(Debug)]
pub struct ContentModel {
    entries: Vec<DocumentRow>,
    matrix: TfidfMatrix,
}

impl ContentModel {
    pub fn build(catalog: &MovieCatalog, config: &ContentConfig) -> Self {
        let started = Instant::now();
        let entries = compose_documents(catalog, config);

        let texts: Vec<String> = entries.iter().map(|e| e.document.clone()).collect();
        let matrix = TfidfVectorizer::new().fit_transform(&texts);

        info!(
            movies = entries.len(),
            vocabulary = matrix.vocabulary().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built content model"
        );

        Self { entries, matrix }
    }

    pub fn entries(&self) -> &[DocumentRow] {
        &self.entries
    }

    pub fn matrix(&self) -> &TfidfMatrix {
        &self.matrix
    }
}

/// Content-based recommendation engine.
pub struct ContentBasedEngine {
    catalog: Arc<MovieCatalog>,
    config: ContentConfig,
    model: RwLock<Option<Arc<ContentModel>>>,
}

impl ContentBasedEngine {
    pub fn new(catalog: Arc<MovieCatalog>, config: ContentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            model: RwLock::new(None),
        })
    }

    /// Engine over the given catalog with default configuration.
    pub fn with_default_config(catalog: Arc<MovieCatalog>) -> Self {
        Self {
            catalog,
            config: ContentConfig::default(),
            model: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Get the cached model, building it on first use.
    ///
    /// Readers share the built model through an `Arc`; a rebuild swaps
    /// the slot atomically under the write lock, so in-flight requests
    /// see either the fully-old or fully-new model, never a partial one.
    pub fn model(&self) -> Arc<ContentModel> {
        if let Some(model) = self
            .model
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return Arc::clone(model);
        }

        let mut slot = self.model.write().unwrap_or_else(|e| e.into_inner());
        // Another request may have built the model while we waited.
        if let Some(model) = slot.as_ref() {
            return Arc::clone(model);
        }

        let model = Arc::new(ContentModel::build(&self.catalog, &self.config));
        *slot = Some(Arc::clone(&model));
        model
    }

    /// Drop the cached model so the next request rebuilds it. Needed
    /// only when the engine is re-pointed at changed source data.
    pub fn invalidate(&self) {
        let mut slot = self.model.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}

impl Recommender for ContentBasedEngine {
    fn recommend(&self, favorites: &[String], top_n: usize) -> Result<Vec<String>> {
        if favorites.len() != NUM_FAVORITES {
            return Err(RecsError::invalid_request(format!(
                "expected {NUM_FAVORITES} favorite titles, got {}",
                favorites.len()
            )));
        }
        if top_n == 0 {
            return Err(RecsError::invalid_request("top_n must be positive"));
        }

        let model = self.model();
        let ranker = SimilarityRanker::new(model.entries(), model.matrix());
        let ranked = ranker.rank(favorites, top_n)?;

        Ok(ranked.into_iter().map(|r| r.title).collect())
    }
}
