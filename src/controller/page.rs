//! The page layout the controller works on
//!
//! Holds explicit handles to every region the controller reads or writes,
//! and assembles them into a full HTML document on demand.

use crate::document::Element;

pub const SEARCH_FORM_ID: &str = "searchForm";
pub const TERM_INPUT_ID: &str = "searchForm-term";
pub const SHOWS_LIST_ID: &str = "showsList";
pub const EPISODES_AREA_ID: &str = "episodesArea";
pub const EPISODES_LIST_ID: &str = "episodesList";
pub const STATUS_ID: &str = "statusMessage";

const PAGE_TITLE: &str = "TV Show Search";

/// The regions of the search page.
///
/// Regions are kept as separate elements so the renderers can borrow two
/// of them mutably at once; [`Page::document`] puts them back together.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub(crate) term_input: Element,
    pub(crate) status: Element,
    pub(crate) shows_list: Element,
    pub(crate) episodes_area: Element,
    pub(crate) episodes_list: Element,
}

impl Page {
    /// Creates the initial page: empty search field, no shows, hidden
    /// episode area and hidden status line.
    pub fn new() -> Self {
        Self {
            term_input: Element::new("input")
                .with_id(TERM_INPUT_ID)
                .with_attr("type", "text")
                .with_attr("placeholder", "Show title")
                .with_attr("value", ""),
            status: Element::new("div")
                .with_id(STATUS_ID)
                .with_class("alert alert-danger")
                .hidden(),
            shows_list: Element::new("div").with_id(SHOWS_LIST_ID).with_class("row"),
            episodes_area: Element::new("section")
                .with_id(EPISODES_AREA_ID)
                .with_child(Element::new("h2").with_text("Episodes"))
                .hidden(),
            episodes_list: Element::new("ul").with_id(EPISODES_LIST_ID),
        }
    }

    /// Types a new value into the search field.
    pub fn set_search_term(&mut self, term: &str) {
        self.term_input.set_attr("value", term);
    }

    /// Current value of the search field.
    pub fn search_term(&self) -> &str {
        self.term_input.attr("value").unwrap_or_default()
    }

    pub fn shows_list(&self) -> &Element {
        &self.shows_list
    }

    pub fn episodes_area(&self) -> &Element {
        &self.episodes_area
    }

    pub fn episodes_list(&self) -> &Element {
        &self.episodes_list
    }

    pub fn status(&self) -> &Element {
        &self.status
    }

    /// Number of show cards currently in the shows list, hidden ones
    /// included.
    pub fn card_count(&self) -> usize {
        self.shows_list.children().count()
    }

    /// Shows `message` in the status line.
    pub(crate) fn show_error(&mut self, message: &str) {
        self.status.clear();
        self.status.append_text(message);
        self.status.show();
    }

    pub(crate) fn clear_error(&mut self) {
        self.status.clear();
        self.status.hide();
    }

    /// Assembles the `<body>` of the page.
    pub fn document(&self) -> Element {
        let form = Element::new("form")
            .with_id(SEARCH_FORM_ID)
            .with_child(self.term_input.clone())
            .with_child(
                Element::new("button")
                    .with_attr("type", "submit")
                    .with_class("btn btn-primary")
                    .with_text("Go!"),
            );

        Element::new("body")
            .with_child(Element::new("h1").with_text(PAGE_TITLE))
            .with_child(form)
            .with_child(self.status.clone())
            .with_child(self.shows_list.clone())
            .with_child(self.episodes_area.clone().with_child(self.episodes_list.clone()))
    }

    /// Serializes the page to a standalone HTML document.
    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head>{}</html>\n",
            PAGE_TITLE,
            self.document().to_html()
        )
    }

    /// Text of everything currently visible on the page.
    pub fn visible_text(&self) -> String {
        self.document().visible_text()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
