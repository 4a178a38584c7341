/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Only the fields we display are declared; serde skips the rest.
use serde::Deserialize;

/// One hit from the `/search/shows` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show, wrapped next to the relevance score
    pub show: TvMazeShow,
}

/// A show object as returned by TVMaze.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
    pub rating: Option<TvMazeRating>,
    /// Broadcast network, null for streaming-only shows
    pub network: Option<TvMazeChannel>,
    /// Streaming channel, null for broadcast shows
    #[serde(rename = "webChannel")]
    pub web_channel: Option<TvMazeChannel>,
    #[serde(rename = "averageRuntime")]
    pub average_runtime: Option<u32>,
    pub image: Option<TvMazeImage>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TvMazeRating {
    pub average: Option<f64>,
}

/// Network or web channel; both share the same shape.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeChannel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number (0 for specials in some shows)
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
    /// Episode summary in HTML format (may be null)
    pub summary: Option<String>,
}
