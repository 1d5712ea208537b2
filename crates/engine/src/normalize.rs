//! Metadata normalization
//!
//! Cleans raw per-movie attribute fields into consistent lowercase,
//! delimiter-normalized feature strings before document composition.
//! Absent fields always degrade to empty strings; nothing here raises.

use once_cell::sync::Lazy;
use regex::Regex;

/// Parenthesized 4-digit release year inside a title, e.g. "(1995)"
static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d{4})\)").expect("Failed to compile year regex"));

/// Multi-value field delimiter used by the source tables.
const FIELD_DELIMITER: char = '|';

/// Normalize a pipe-delimited genre field: delimiters become single
/// spaces, the whole field is lowercased.
pub fn normalize_genres(genres: &str) -> String {
    genres.replace(FIELD_DELIMITER, " ").to_lowercase()
}

/// Normalize the lead cast field.
///
/// Keeps at most the first `limit` entries and strips all whitespace, so
/// "Tom Hanks|Tim Allen" collapses to "tomhankstimallen". The retained
/// entries fuse into a single token with no separator between names;
/// this mirrors the long-standing behavior the rest of the pipeline was
/// tuned against, so cast only matches between movies sharing the same
/// leading lineup.
pub fn normalize_cast(title_cast: Option<&str>, limit: usize) -> String {
    let Some(raw) = title_cast else {
        return String::new();
    };

    raw.split(FIELD_DELIMITER)
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Normalize the director field into one token.
///
/// Whitespace, periods, and hyphens are stripped to unify name variants
/// like "David O. Russell" and "Kim Ki-duk".
pub fn normalize_director(director: Option<&str>) -> String {
    let Some(raw) = director else {
        return String::new();
    };

    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

/// Normalize the plot keyword field: delimiters become single spaces.
/// Keywords are already lowercase upstream and are otherwise left as-is.
pub fn normalize_keywords(plot_keywords: Option<&str>) -> String {
    plot_keywords
        .map(|raw| raw.replace(FIELD_DELIMITER, " "))
        .unwrap_or_default()
}

/// Normalize a single free-text tag.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
}

/// Extract the release year from a title's parenthetical, without the
/// parentheses. Titles without a 4-digit parenthetical yield "".
pub fn extract_year(title: &str) -> String {
    YEAR_REGEX
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
