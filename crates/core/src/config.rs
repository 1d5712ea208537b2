//! Configuration loading for the recommendation engines
//!
//! Environment variable parsing with the `MOVIE_RECS_` prefix, `.env`
//! file support via dotenvy, defaults for optional values, and
//! validation with clear error messages. Override hierarchy:
//! defaults < .env < environment.

use crate::error::{RecsError, Result};

/// Default bound on the working subset of the movie corpus.
pub const DEFAULT_SUBSET_SIZE: usize = 27_000;

/// Default number of lead cast entries retained per movie.
pub const DEFAULT_LEAD_CAST_LIMIT: usize = 5;

/// Load a `.env` file if one is present. Missing files are fine.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Configuration loader trait
///
/// Standardized methods for loading and validating configuration from
/// environment variables.
pub trait ConfigLoader: Sized {
    /// Load configuration from `MOVIE_RECS_`-prefixed environment
    /// variables, falling back to defaults for anything unset.
    fn from_env() -> Result<Self>;

    /// Validate configuration values against their acceptable ranges.
    fn validate(&self) -> Result<()>;
}

/// Content-based engine configuration
///
/// # Environment Variables
///
/// - `MOVIE_RECS_SUBSET_SIZE` (optional): number of movie rows the engine
///   vectorizes, taken as a prefix of the source table (default: 27000).
///   The cutoff bounds vectorization cost; it is a tuning knob, not an
///   algorithmic requirement, so full-corpus operation is just a larger
///   value.
/// - `MOVIE_RECS_LEAD_CAST_LIMIT` (optional): lead cast entries retained
///   per movie (default: 5)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Working subset bound (prefix of the movie table)
    pub subset_size: usize,
    /// Lead cast entries retained per movie
    pub lead_cast_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            subset_size: DEFAULT_SUBSET_SIZE,
            lead_cast_limit: DEFAULT_LEAD_CAST_LIMIT,
        }
    }
}

impl ConfigLoader for ContentConfig {
    fn from_env() -> Result<Self> {
        let subset_size = parse_env("MOVIE_RECS_SUBSET_SIZE", DEFAULT_SUBSET_SIZE)?;
        let lead_cast_limit = parse_env("MOVIE_RECS_LEAD_CAST_LIMIT", DEFAULT_LEAD_CAST_LIMIT)?;

        let config = Self {
            subset_size,
            lead_cast_limit,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.subset_size == 0 {
            return Err(RecsError::configuration(
                "MOVIE_RECS_SUBSET_SIZE must be greater than zero",
            ));
        }
        if self.lead_cast_limit == 0 {
            return Err(RecsError::configuration(
                "MOVIE_RECS_LEAD_CAST_LIMIT must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn parse_env(name: &str, default: usize) -> Result<usize> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<usize>()
            .map_err(|_| RecsError::configuration(format!("{name} is not a valid integer: {value}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContentConfig::default();
        assert_eq!(config.subset_size, 27_000);
        assert_eq!(config.lead_cast_limit, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_subset_size_rejected() {
        let config = ContentConfig {
            subset_size: 0,
            lead_cast_limit: 5,
        };
        assert!(matches!(
            config.validate(),
            Err(RecsError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_cast_limit_rejected() {
        let config = ContentConfig {
            subset_size: 100,
            lead_cast_limit: 0,
        };
        assert!(config.validate().is_err());
    }
}
