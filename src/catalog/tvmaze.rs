/// TVMaze catalog implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{
    CatalogError, CatalogProvider, EpisodeRecord, NO_SUMMARY, PLACEHOLDER_IMAGE, Rating, Show,
    UNKNOWN_NETWORK,
};
use serde::de::DeserializeOwned;

/// Base URL of the public TVMaze API.
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Catalog backed by the TVMaze API.
///
/// Uses the `/search/shows` endpoint for searching and
/// `/shows/{id}/episodes` for the episode listing.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a new catalog talking to the public TVMaze API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new catalog talking to a different TVMaze compatible host.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search/shows", self.base_url)
    }

    fn episodes_url(&self, show_id: u64) -> String {
        format!("{}/shows/{}/episodes", self.base_url, show_id)
    }

    /// Sends a GET request and parses the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        tracing::debug!(url, ?query, "TVMaze request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "TVMaze request failed");
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json()
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    /// Converts a TVMaze show to the record displayed on a card.
    ///
    /// Fills in the placeholders for missing summary, rating, network and
    /// image. The network falls back to the web channel for streaming shows.
    fn convert_show(tvmaze_show: TvMazeShow) -> Show {
        let rating = tvmaze_show
            .rating
            .and_then(|r| r.average)
            .filter(|average| *average > 0.0)
            .map_or(Rating::NotRated, Rating::Average);

        let network = tvmaze_show
            .network
            .or(tvmaze_show.web_channel)
            .map(|channel| channel.name)
            .unwrap_or_else(|| UNKNOWN_NETWORK.to_string());

        Show {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: tvmaze_show
                .summary
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
            rating,
            network,
            runtime: tvmaze_show.average_runtime,
            image: tvmaze_show
                .image
                .and_then(|image| image.medium)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }

    /// Converts a TVMaze episode to our record, field by field.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> EpisodeRecord {
        EpisodeRecord {
            id: tvmaze_episode.id,
            name: tvmaze_episode.name.unwrap_or_default(),
            season: tvmaze_episode.season,
            number: tvmaze_episode.number,
            summary: tvmaze_episode.summary,
        }
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        let results: Vec<TvMazeSearchResult> =
            self.get_json(&self.search_url(), &[("q", term)])?;

        Ok(results
            .into_iter()
            .map(|result| Self::convert_show(result.show))
            .collect())
    }

    fn list_episodes(&self, show_id: u64) -> Result<Vec<EpisodeRecord>, CatalogError> {
        let url = self.episodes_url(show_id);
        let episodes = match self.get_json::<Vec<TvMazeEpisode>>(&url, &[]) {
            Ok(episodes) => episodes,
            Err(CatalogError::HttpStatus { status: 404, .. }) => {
                return Err(CatalogError::ShowNotFound(show_id));
            }
            Err(e) => return Err(e),
        };

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}
