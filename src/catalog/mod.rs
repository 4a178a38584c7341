//! Catalog client for TV show metadata
//!
//! This module provides the view records the rest of the crate renders
//! (shows and episodes), the error type for catalog lookups, and the
//! trait every catalog backend implements.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{DEFAULT_BASE_URL, TvMazeCatalog};

use std::fmt;
use thiserror::Error;

/// Image shown for shows the catalog has no artwork for.
pub const PLACEHOLDER_IMAGE: &str =
    "https://cdn5.vectorstock.com/i/1000x1000/65/74/broken-tv-signal-vector-2026574.jpg";

/// Summary used when the catalog has no description for a show.
pub const NO_SUMMARY: &str = "No info Available";

/// Network label used when a show has neither a network nor a web channel.
pub const UNKNOWN_NETWORK: &str = "Unknown network";

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request could not be sent or the connection failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The response body was not the JSON shape we expect
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The catalog does not know the requested show
    #[error("Show not found: {0}")]
    ShowNotFound(u64),

    /// The catalog answered with a non-success status
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },
}

/// Average rating of a show, or the lack of one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    /// Average user rating as reported by the catalog
    Average(f64),
    /// The catalog has no (or a zero) rating for this show
    NotRated,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Average(average) => write!(f, "{}", average),
            Rating::NotRated => f.write_str("Not Rated"),
        }
    }
}

/// A show as it is displayed on a card.
///
/// All display fields except `runtime` are already defaulted, so renderers
/// never have to deal with missing catalog data.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Catalog identifier, used as the card's correlation key
    pub id: u64,
    /// Display name
    pub name: String,
    /// HTML summary, or [`NO_SUMMARY`]
    pub summary: String,
    /// Average rating
    pub rating: Rating,
    /// Broadcast network or web channel name, or [`UNKNOWN_NETWORK`]
    pub network: String,
    /// Average runtime in minutes
    pub runtime: Option<u32>,
    /// Medium sized poster URL, or [`PLACEHOLDER_IMAGE`]
    pub image: String,
}

/// A single episode of the currently selected show.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeRecord {
    /// Catalog identifier of the episode
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season (absent for specials)
    pub number: Option<u32>,
    /// HTML summary, passed through untouched
    pub summary: Option<String>,
}

impl EpisodeRecord {
    /// Returns the summary unless it is absent or empty.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// Trait for catalog services that can search shows and list episodes.
///
/// Every call is a single idempotent read. Implementations must not retry
/// or cache.
pub trait CatalogProvider {
    /// Searches the catalog for shows matching `term`.
    ///
    /// The term is passed on verbatim, an empty term included.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the response
    /// cannot be parsed.
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError>;

    /// Lists all episodes of the show with the given catalog ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShowNotFound`] for unknown IDs, and other
    /// [`CatalogError`] variants for transport or parse failures.
    fn list_episodes(&self, show_id: u64) -> Result<Vec<EpisodeRecord>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::Average(8.5).to_string(), "8.5");
        assert_eq!(Rating::Average(7.0).to_string(), "7");
        assert_eq!(Rating::NotRated.to_string(), "Not Rated");
    }

    #[test]
    fn test_summary_text() {
        let mut episode = EpisodeRecord {
            id: 1,
            name: "Pilot".to_string(),
            season: 1,
            number: Some(1),
            summary: None,
        };
        assert_eq!(episode.summary_text(), None);

        episode.summary = Some(String::new());
        assert_eq!(episode.summary_text(), None);

        episode.summary = Some(" ".to_string());
        assert_eq!(episode.summary_text(), Some(" "));

        episode.summary = Some("<p>It begins.</p>".to_string());
        assert_eq!(episode.summary_text(), Some("<p>It begins.</p>"));
    }
}
