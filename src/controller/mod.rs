//! Interaction controller
//!
//! Turns the two user interactions of the search page, submitting the
//! search form and clicking a card's "Episodes" button, into catalog calls
//! and renders the results into the [`Page`].
//!
//! Every interaction is split into a `begin_*` and a `complete_*` step.
//! Each begun request gets a sequence number; a completion that is older
//! than the most recently begun request of the same kind is discarded, so
//! a slow response can never overwrite a newer one.
mod page;

pub use page::{
    EPISODES_AREA_ID, EPISODES_LIST_ID, Page, SEARCH_FORM_ID, SHOWS_LIST_ID, STATUS_ID,
    TERM_INPUT_ID,
};

use crate::ProgressEvent;
use crate::catalog::{CatalogError, CatalogProvider, EpisodeRecord, Show};
use crate::render::{SHOW_ID_ATTR, render_episodes, render_shows};
use thiserror::Error;

/// Errors that can occur while handling a user interaction.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// There is no card at the clicked position
    #[error("No show card at position {0}")]
    NoSuchCard(usize),

    /// No card for the requested show is on the page
    #[error("Show {0} is not among the current search results")]
    UnknownShow(u64),

    /// The clicked card carries no show ID
    #[error("Show card has no show ID")]
    MissingShowId,

    /// The clicked card's show ID is not a number
    #[error("Invalid show ID on card: {0}")]
    InvalidShowId(String),

    /// The catalog call failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Whether a completed response made it onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the latest request and was rendered
    Current,
    /// A newer request was begun in the meantime; the response was dropped
    Stale,
}

/// Kind of request a discarded response belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Search,
    Episodes,
}

/// A begun search, waiting for its catalog response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    sequence: u64,
    term: String,
}

impl SearchRequest {
    /// The term read from the search field when the form was submitted.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// A begun episode request, waiting for its catalog response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodesRequest {
    sequence: u64,
    show_id: u64,
}

impl EpisodesRequest {
    /// The show whose card was clicked.
    pub fn show_id(&self) -> u64 {
        self.show_id
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Drives the search page: owns the catalog and the page it renders into.
pub struct ShowBrowser<C>
where
    C: CatalogProvider,
{
    catalog: C,
    page: Page,
    /// Sequence number of the latest begun search
    search_sequence: u64,
    /// Sequence number of the latest begun (or invalidated) episode request
    episodes_sequence: u64,
}

impl<C> ShowBrowser<C>
where
    C: CatalogProvider,
{
    /// Creates a controller for a fresh, empty page.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            page: Page::new(),
            search_sequence: 0,
            episodes_sequence: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Types `term` into the search field.
    pub fn set_search_term(&mut self, term: &str) {
        self.page.set_search_term(term);
    }

    /// Submits the search form: searches the catalog for the current
    /// search field value and renders the matching shows.
    ///
    /// # Errors
    ///
    /// Returns the catalog error if the search fails. The page then shows
    /// the error in its status line and keeps its previous content.
    pub fn submit_search<F>(&mut self, mut progress: F) -> Result<Applied, ControllerError>
    where
        F: FnMut(ProgressEvent),
    {
        let request = self.begin_search();
        progress(ProgressEvent::Searching {
            term: request.term.clone(),
        });

        let result = self.catalog.search_shows(&request.term);
        self.complete_search(request, result, progress)
    }

    /// Starts a search for the current search field value.
    ///
    /// The term is not validated; an empty field searches for "".
    pub fn begin_search(&mut self) -> SearchRequest {
        self.search_sequence += 1;
        SearchRequest {
            sequence: self.search_sequence,
            term: self.page.search_term().to_string(),
        }
    }

    /// Applies the catalog response of a begun search.
    ///
    /// A current response hides the episode area and replaces all show
    /// cards. It also invalidates every pending episode request, since the
    /// cards those were started from are gone.
    ///
    /// # Errors
    ///
    /// Returns the catalog error of a current, failed response.
    pub fn complete_search<F>(
        &mut self,
        request: SearchRequest,
        result: Result<Vec<Show>, CatalogError>,
        mut progress: F,
    ) -> Result<Applied, ControllerError>
    where
        F: FnMut(ProgressEvent),
    {
        if request.sequence != self.search_sequence {
            tracing::debug!(
                sequence = request.sequence,
                latest = self.search_sequence,
                "Discarding stale search response"
            );
            progress(ProgressEvent::StaleResponseDiscarded {
                kind: RequestKind::Search,
                sequence: request.sequence,
            });
            return Ok(Applied::Stale);
        }

        let shows = self.apply_result(result, &mut progress)?;

        self.episodes_sequence += 1;
        self.page.episodes_area.hide();
        render_shows(&mut self.page.shows_list, &shows);

        progress(ProgressEvent::ShowsFound {
            term: request.term,
            count: shows.len(),
        });

        Ok(Applied::Current)
    }

    /// Clicks the "Episodes" button of the card at `card_index` in the
    /// shows list, then lists that show's episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such card, the card has no valid
    /// show ID, or the catalog call fails.
    pub fn click_episodes<F>(
        &mut self,
        card_index: usize,
        mut progress: F,
    ) -> Result<Applied, ControllerError>
    where
        F: FnMut(ProgressEvent),
    {
        let request = self.begin_episodes(card_index)?;
        progress(ProgressEvent::FetchingEpisodes {
            show_id: request.show_id,
        });

        let result = self.catalog.list_episodes(request.show_id);
        self.complete_episodes(request, result, progress)
    }

    /// Clicks the "Episodes" button on the card of the given show.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::UnknownShow`] if no card for the show is
    /// on the page, and otherwise the errors of [`Self::click_episodes`].
    pub fn click_episodes_for_show<F>(
        &mut self,
        show_id: u64,
        progress: F,
    ) -> Result<Applied, ControllerError>
    where
        F: FnMut(ProgressEvent),
    {
        let key = show_id.to_string();
        let card_index = self
            .page
            .shows_list
            .children()
            .position(|card| card.attr(SHOW_ID_ATTR) == Some(key.as_str()))
            .ok_or(ControllerError::UnknownShow(show_id))?;

        self.click_episodes(card_index, progress)
    }

    /// Starts an episode request for the card at `card_index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such card or its show ID is missing
    /// or malformed.
    pub fn begin_episodes(&mut self, card_index: usize) -> Result<EpisodesRequest, ControllerError> {
        let card = self
            .page
            .shows_list
            .children()
            .nth(card_index)
            .ok_or(ControllerError::NoSuchCard(card_index))?;

        let raw_id = card
            .attr(SHOW_ID_ATTR)
            .ok_or(ControllerError::MissingShowId)?;
        let show_id = raw_id
            .parse::<u64>()
            .map_err(|_| ControllerError::InvalidShowId(raw_id.to_string()))?;

        self.episodes_sequence += 1;
        Ok(EpisodesRequest {
            sequence: self.episodes_sequence,
            show_id,
        })
    }

    /// Applies the catalog response of a begun episode request.
    ///
    /// A current response replaces the episode list, shows the episode
    /// area and hides every card except the selected show's.
    ///
    /// # Errors
    ///
    /// Returns the catalog error of a current, failed response.
    pub fn complete_episodes<F>(
        &mut self,
        request: EpisodesRequest,
        result: Result<Vec<EpisodeRecord>, CatalogError>,
        mut progress: F,
    ) -> Result<Applied, ControllerError>
    where
        F: FnMut(ProgressEvent),
    {
        if request.sequence != self.episodes_sequence {
            tracing::debug!(
                sequence = request.sequence,
                latest = self.episodes_sequence,
                "Discarding stale episodes response"
            );
            progress(ProgressEvent::StaleResponseDiscarded {
                kind: RequestKind::Episodes,
                sequence: request.sequence,
            });
            return Ok(Applied::Stale);
        }

        let episodes = self.apply_result(result, &mut progress)?;

        render_episodes(
            &mut self.page.episodes_list,
            &mut self.page.episodes_area,
            &episodes,
        );

        let key = request.show_id.to_string();
        for card in self.page.shows_list.children_mut() {
            if card.attr(SHOW_ID_ATTR) == Some(key.as_str()) {
                card.show();
            } else {
                card.hide();
            }
        }

        progress(ProgressEvent::EpisodesFound {
            show_id: request.show_id,
            count: episodes.len(),
        });

        Ok(Applied::Current)
    }

    /// Unwraps a current catalog result, putting failures on the status
    /// line and clearing it on success.
    fn apply_result<T, F>(
        &mut self,
        result: Result<T, CatalogError>,
        progress: &mut F,
    ) -> Result<T, ControllerError>
    where
        F: FnMut(ProgressEvent),
    {
        match result {
            Ok(value) => {
                self.page.clear_error();
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog request failed");
                self.page
                    .show_error(&format!("Something went wrong: {}", e));
                progress(ProgressEvent::RequestFailed {
                    message: e.to_string(),
                });
                Err(e.into())
            }
        }
    }
}
