//! Show cards

use crate::catalog::Show;
use crate::document::Element;

/// Class every show card carries.
pub const SHOW_CARD_CLASS: &str = "Show";

/// Class of the button that requests a show's episodes.
pub const EPISODES_TRIGGER_CLASS: &str = "Show-getEpisodes";

/// Attribute holding the catalog ID on each card.
pub const SHOW_ID_ATTR: &str = "data-show-id";

/// Replaces the content of `container` with one card per show.
///
/// Cards keep the order of `shows`.
pub fn render_shows(container: &mut Element, shows: &[Show]) {
    container.clear();

    for show in shows {
        container.append(show_card(show));
    }
}

fn show_card(show: &Show) -> Element {
    let runtime = match show.runtime {
        Some(minutes) => format!("Runtime: {} minutes", minutes),
        None => "Runtime: unknown".to_string(),
    };

    let body = Element::new("div")
        .with_class("media-body")
        .with_child(Element::new("h5").with_class("text-primary").with_text(&show.name))
        .with_child(small_line(format!("Rating: {}", show.rating)))
        .with_child(small_line(runtime))
        .with_child(small_line(format!("Network: {}", show.network)))
        .with_child(Element::new("div").with_child(Element::new("small").with_html(&show.summary)))
        .with_child(
            Element::new("button")
                .with_class(&format!("btn btn-outline-light btn-sm {}", EPISODES_TRIGGER_CLASS))
                .with_text("Episodes"),
        );

    let media = Element::new("div")
        .with_class("media")
        .with_child(
            Element::new("img")
                .with_attr("src", &show.image)
                .with_attr("alt", &show.name)
                .with_class("w-25 me-3"),
        )
        .with_child(body);

    Element::new("div")
        .with_attr(SHOW_ID_ATTR, show.id.to_string())
        .with_class(&format!("{} col-md-12 col-lg-6 mb-4", SHOW_CARD_CLASS))
        .with_child(media)
}

fn small_line(text: String) -> Element {
    Element::new("div").with_child(Element::new("small").with_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NO_SUMMARY, PLACEHOLDER_IMAGE, Rating};

    fn show(id: u64, name: &str, rating: Rating) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: NO_SUMMARY.to_string(),
            rating,
            network: "NBC".to_string(),
            runtime: Some(30),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    fn first_small(card: &Element) -> String {
        card.find(&|e: &Element| e.tag() == "small")
            .map(Element::text_content)
            .unwrap_or_default()
    }

    #[test]
    fn test_render_shows_cards() {
        let mut container = Element::new("div").with_id("showsList");
        let shows = vec![
            show(1, "Show 1", Rating::Average(8.5)),
            show(2, "Show 2", Rating::Average(7.9)),
        ];

        render_shows(&mut container, &shows);

        assert_eq!(container.find_all_by_class(SHOW_CARD_CLASS).len(), 2);

        let first = container.find_by_attr(SHOW_ID_ATTR, "1").unwrap();
        let title = first.find_all_by_class("text-primary");
        assert_eq!(title[0].text_content(), "Show 1");
        assert_eq!(first_small(first), "Rating: 8.5");

        let second = container.find_by_attr(SHOW_ID_ATTR, "2").unwrap();
        assert_eq!(second.find_all_by_class("text-primary")[0].text_content(), "Show 2");
        assert_eq!(first_small(second), "Rating: 7.9");

        let ids: Vec<_> = container.children().filter_map(|c| c.attr(SHOW_ID_ATTR)).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_render_shows_replaces_previous_cards() {
        let mut container = Element::new("div").with_id("showsList");
        render_shows(&mut container, &[show(5, "Old", Rating::NotRated)]);
        render_shows(&mut container, &[show(6, "New", Rating::NotRated)]);

        assert_eq!(container.children().count(), 1);
        assert!(container.find_by_attr(SHOW_ID_ATTR, "5").is_none());
        assert!(container.find_by_attr(SHOW_ID_ATTR, "6").is_some());
    }

    #[test]
    fn test_render_shows_is_idempotent() {
        let shows = vec![
            show(1, "Show 1", Rating::Average(8.5)),
            show(2, "Show 2", Rating::NotRated),
        ];

        let mut once = Element::new("div").with_id("showsList");
        render_shows(&mut once, &shows);

        let mut twice = Element::new("div").with_id("showsList");
        render_shows(&mut twice, &shows);
        render_shows(&mut twice, &shows);

        assert_eq!(once.to_html(), twice.to_html());
    }

    #[test]
    fn test_render_placeholders() {
        let mut container = Element::new("div");
        let mut unrated = show(3, "Unrated", Rating::NotRated);
        unrated.runtime = None;
        render_shows(&mut container, &[unrated]);

        let text = container.text_content();
        assert!(text.contains("Rating: Not Rated"));
        assert!(text.contains("Runtime: unknown"));
        assert!(text.contains(NO_SUMMARY));

        let image = container.find(&|e: &Element| e.tag() == "img").unwrap();
        assert_eq!(image.attr("src"), Some(PLACEHOLDER_IMAGE));
        assert_eq!(image.attr("alt"), Some("Unrated"));
    }

    #[test]
    fn test_card_has_episodes_trigger() {
        let mut container = Element::new("div");
        render_shows(&mut container, &[show(9, "Triggered", Rating::NotRated)]);

        let triggers = container.find_all_by_class(EPISODES_TRIGGER_CLASS);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].tag(), "button");
        assert_eq!(triggers[0].text_content(), "Episodes");
    }

    #[test]
    fn test_names_are_escaped() {
        let mut container = Element::new("div");
        render_shows(&mut container, &[show(4, "Tom & <Jerry>", Rating::NotRated)]);

        let html = container.to_html();
        assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(!html.contains("<Jerry>"));
    }
}
