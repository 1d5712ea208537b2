//! Composite document assembly
//!
//! Merges the normalized attribute fields of each movie in the working
//! subset into one text document per movie. Tag rows are aggregated into
//! a single string per movie first, since the tag table has many rows
//! per movie.

use crate::normalize::{
    extract_year, normalize_cast, normalize_director, normalize_genres, normalize_keywords,
    normalize_tag,
};
use movie_recs_core::{ContentConfig, MovieCatalog, TagRecord};
use std::collections::HashMap;
use tracing::debug;

/// One composite document, carrying the movie identity alongside the
/// text so downstream ranking never relies on positional coincidence
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub movie_id: u32,
    pub title: String,
    pub document: String,
}

/// Aggregate tag rows into one lowercased string per movie.
///
/// Tags belonging to the same movie are joined with single spaces in
/// source order, so ["Funny", "funny", "twist"] becomes "funny funny
/// twist". Movies without tags are simply absent from the map and read
/// back as empty strings at composition time.
pub fn aggregate_tags(tags: &[TagRecord]) -> HashMap<u32, String> {
    let mut grouped: HashMap<u32, String> = HashMap::new();

    for record in tags {
        let entry = grouped.entry(record.movie_id).or_default();
        if !entry.is_empty() {
            entry.push(' ');
        }
        entry.push_str(&normalize_tag(&record.tag));
    }

    grouped
}

/// Compose one document per movie in the working subset.
///
/// The subset is the first `config.subset_size` rows of the validated
/// movie table; extended metadata and tags are left-joined by movie
/// identifier. Field order is fixed: genres, lead cast, director, plot
/// keywords, aggregated tags, year, each separated by a single space.
/// Missing fields contribute empty strings, never a missing document.
pub fn compose_documents(catalog: &MovieCatalog, config: &ContentConfig) -> Vec<DocumentRow> {
    let grouped_tags = aggregate_tags(catalog.tags());
    let subset = &catalog.movies()[..catalog.len().min(config.subset_size)];

    let rows: Vec<DocumentRow> = subset
        .iter()
        .map(|movie| {
            let credits = catalog.credits_for(movie.movie_id);

            let genres = normalize_genres(&movie.genres);
            let cast = normalize_cast(
                credits.and_then(|c| c.title_cast.as_deref()),
                config.lead_cast_limit,
            );
            let director = normalize_director(credits.and_then(|c| c.director.as_deref()));
            let keywords = normalize_keywords(credits.and_then(|c| c.plot_keywords.as_deref()));
            let tags = grouped_tags
                .get(&movie.movie_id)
                .cloned()
                .unwrap_or_default();
            let year = extract_year(&movie.title);

            let document = [genres, cast, director, keywords, tags, year].join(" ");

            DocumentRow {
                movie_id: movie.movie_id,
                title: movie.title.clone(),
                document,
            }
        })
        .collect();

    debug!(
        documents = rows.len(),
        subset_size = config.subset_size,
        "composed working-subset documents"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use movie_recs_core::{CreditsRecord, MovieRecord};

    fn tag(movie_id: u32, tag: &str) -> TagRecord {
        TagRecord {
            movie_id,
            tag: tag.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_aggregate_tags_preserves_order_and_case_normalizes() {
        let tags = vec![tag(1, "Funny"), tag(1, "funny"), tag(1, "twist"), tag(2, "Dark")];
        let grouped = aggregate_tags(&tags);

        assert_eq!(grouped.get(&1).unwrap(), "funny funny twist");
        assert_eq!(grouped.get(&2).unwrap(), "dark");
        assert!(!grouped.contains_key(&3));
    }

    #[test]
    fn test_compose_documents_field_order() {
        let movies = vec![MovieRecord {
            movie_id: 1,
            title: "Toy Story (1995)".to_string(),
            genres: "Adventure|Animation".to_string(),
        }];
        let credits = vec![CreditsRecord {
            movie_id: 1,
            title_cast: Some("Tom Hanks|Tim Allen".to_string()),
            director: Some("John Lasseter".to_string()),
            plot_keywords: Some("toy|rivalry".to_string()),
        }];
        let tags = vec![tag(1, "Pixar")];

        let catalog = MovieCatalog::new(movies, credits, tags).unwrap();
        let rows = compose_documents(&catalog, &ContentConfig::default());

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].document,
            "adventure animation tomhankstimallen johnlasseter toy rivalry pixar 1995"
        );
    }

    #[test]
    fn test_compose_documents_missing_metadata_degrades_to_empty() {
        let movies = vec![MovieRecord {
            movie_id: 7,
            title: "Cosmos".to_string(),
            genres: "Documentary".to_string(),
        }];

        let catalog = MovieCatalog::new(movies, Vec::new(), Vec::new()).unwrap();
        let rows = compose_documents(&catalog, &ContentConfig::default());

        // No credits, tags, or year: empty fields, never an absent document.
        assert_eq!(rows[0].document, "documentary     ");
    }

    #[test]
    fn test_compose_documents_respects_subset_bound() {
        let movies = (1..=10)
            .map(|id| MovieRecord {
                movie_id: id,
                title: format!("Movie {id} (2000)"),
                genres: "Drama".to_string(),
            })
            .collect();

        let catalog = MovieCatalog::new(movies, Vec::new(), Vec::new()).unwrap();
        let config = ContentConfig {
            subset_size: 4,
            ..ContentConfig::default()
        };

        let rows = compose_documents(&catalog, &config);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].movie_id, 4);
    }
}
