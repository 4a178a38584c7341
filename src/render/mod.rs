//! Renderers that turn view records into document elements
//!
//! Both renderers replace the whole content of the region they own, so a
//! render never leaves entries of a previous one behind.
mod episodes;
mod shows;

pub use episodes::render_episodes;
pub use shows::{EPISODES_TRIGGER_CLASS, SHOW_CARD_CLASS, SHOW_ID_ATTR, render_shows};
