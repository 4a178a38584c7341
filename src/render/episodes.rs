//! Episode list items

use crate::catalog::EpisodeRecord;
use crate::document::Element;

/// Replaces the content of `list` with one line item per episode and makes
/// `area` visible afterwards.
pub fn render_episodes(list: &mut Element, area: &mut Element, episodes: &[EpisodeRecord]) {
    list.clear();

    for episode in episodes {
        list.append(episode_item(episode));
    }

    area.show();
}

fn episode_item(episode: &EpisodeRecord) -> Element {
    let position = match episode.number {
        Some(number) => format!("(season {}, episode {})", episode.season, number),
        None => format!("(season {}, special)", episode.season),
    };

    let item = Element::new("li").with_text(format!("{} {}", episode.name, position));

    match episode.summary_text() {
        Some(summary) => item
            .with_text(" ")
            .with_child(Element::new("br"))
            .with_text(" Summary: ")
            .with_html(summary),
        None => item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: u64, number: u32, summary: Option<&str>) -> EpisodeRecord {
        EpisodeRecord {
            id,
            name: format!("Episode {}", number),
            season: 1,
            number: Some(number),
            summary: summary.map(str::to_string),
        }
    }

    fn setup() -> (Element, Element) {
        (
            Element::new("ul").with_id("episodesList"),
            Element::new("section").with_id("episodesArea").hidden(),
        )
    }

    #[test]
    fn test_render_episodes_without_summary() {
        let (mut list, mut area) = setup();
        let episodes = vec![episode(1, 1, None), episode(2, 2, None)];

        render_episodes(&mut list, &mut area, &episodes);

        let items: Vec<_> = list.children().collect();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.tag() == "li"));

        assert!(items[0].text_content().contains("Episode 1"));
        assert!(items[0].text_content().contains("season 1, episode 1"));
        assert!(items[1].text_content().contains("Episode 2"));
        assert!(items[1].text_content().contains("season 1, episode 2"));
        assert!(!list.text_content().contains("Summary:"));

        assert!(!area.is_hidden());
    }

    #[test]
    fn test_summary_line_only_when_present() {
        let (mut list, mut area) = setup();
        let episodes = vec![
            episode(1, 1, Some("<p>Ross gets divorced.</p>")),
            episode(2, 2, Some("")),
            episode(3, 3, None),
        ];

        render_episodes(&mut list, &mut area, &episodes);

        let items: Vec<_> = list.children().collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].text_content().contains("Summary: Ross gets divorced."));
        assert_eq!(
            items[0].to_html(),
            "<li>Episode 1 (season 1, episode 1) <br> Summary: <p>Ross gets divorced.</p></li>"
        );
        assert!(!items[1].text_content().contains("Summary:"));
        assert!(!items[2].text_content().contains("Summary:"));
    }

    #[test]
    fn test_whitespace_summary_counts_as_present() {
        let (mut list, mut area) = setup();
        render_episodes(&mut list, &mut area, &[episode(1, 1, Some(" "))]);

        let items: Vec<_> = list.children().collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].text_content().contains("Summary:"));
        assert_eq!(
            items[0].to_html(),
            "<li>Episode 1 (season 1, episode 1) <br> Summary:  </li>"
        );
    }

    #[test]
    fn test_render_replaces_previous_episodes() {
        let (mut list, mut area) = setup();
        render_episodes(&mut list, &mut area, &[episode(1, 1, None), episode(2, 2, None)]);
        render_episodes(&mut list, &mut area, &[episode(7, 7, None)]);

        assert_eq!(list.children().count(), 1);
        assert!(list.text_content().contains("Episode 7"));
    }

    #[test]
    fn test_special_without_number() {
        let (mut list, mut area) = setup();
        let mut special = episode(1, 0, None);
        special.number = None;
        special.name = "Holiday Special".to_string();

        render_episodes(&mut list, &mut area, &[special]);

        assert_eq!(list.text_content(), "Holiday Special (season 1, special)");
    }

    #[test]
    fn test_empty_list_still_shows_area() {
        let (mut list, mut area) = setup();
        render_episodes(&mut list, &mut area, &[]);

        assert_eq!(list.children().count(), 0);
        assert!(!area.is_hidden());
    }
}
