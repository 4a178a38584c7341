//! show_finder - Search TV shows and browse their episodes
//!
//! This library provides a TVMaze catalog client, a small document model
//! the results are rendered into, and a controller that wires the search
//! form and the per-show "Episodes" buttons to both.
//!
//! # Examples
//!
//! ```no_run
//! use show_finder::{ShowBrowser, TvMazeCatalog};
//!
//! let mut browser = ShowBrowser::new(TvMazeCatalog::new());
//! browser.set_search_term("Friends");
//! browser.submit_search(|_| {}).unwrap();
//! browser.click_episodes(0, |_| {}).unwrap();
//!
//! println!("{}", browser.page().visible_text());
//! ```

mod catalog;
mod controller;
mod document;
mod render;

pub use catalog::{
    CatalogError, CatalogProvider, DEFAULT_BASE_URL, EpisodeRecord, NO_SUMMARY,
    PLACEHOLDER_IMAGE, Rating, Show, TvMazeCatalog, UNKNOWN_NETWORK,
};
pub use controller::{
    Applied, ControllerError, EPISODES_AREA_ID, EPISODES_LIST_ID, EpisodesRequest, Page,
    RequestKind, SEARCH_FORM_ID, SHOWS_LIST_ID, STATUS_ID, SearchRequest, ShowBrowser,
    TERM_INPUT_ID,
};
pub use document::{Element, escape_html};
pub use render::{
    EPISODES_TRIGGER_CLASS, SHOW_CARD_CLASS, SHOW_ID_ATTR, render_episodes, render_shows,
};

use std::io;
use thiserror::Error;

/// Progress event emitted while handling a user interaction
///
/// These events allow library users to report what is going on, or to
/// stay silent by passing a closure that ignores them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// A search request was sent to the catalog
    Searching { term: String },

    /// Search results were rendered
    ShowsFound { term: String, count: usize },

    /// An episode listing was requested for a show
    FetchingEpisodes { show_id: u64 },

    /// Episodes were rendered
    EpisodesFound { show_id: u64, count: usize },

    /// A response arrived after a newer request of the same kind was begun
    StaleResponseDiscarded { kind: RequestKind, sequence: u64 },

    /// The catalog call failed; the page shows the error
    RequestFailed { message: String },
}

/// Top-level error type for show_finder operations
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Error from the catalog service
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error while handling an interaction
    #[error("{0}")]
    Controller(#[from] ControllerError),

    /// Error from an interactive prompt
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
