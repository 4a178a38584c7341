use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use show_finder::{
    ControllerError, DEFAULT_BASE_URL, Element, Page, ProgressEvent, SHOW_ID_ATTR, ShowBrowser,
    ShowFinderError, TvMazeCatalog,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Search TV shows on TVmaze and browse their episodes.
#[derive(Parser)]
#[command(name = "show_finder", version, about)]
struct Cli {
    /// Base URL of the TVmaze compatible API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for shows and list them
    Search {
        /// Search term, passed to the catalog as-is (may be empty)
        term: String,

        /// Write the rendered page to this HTML file instead of printing it
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Search for shows, then list the episodes of one of the results
    Episodes {
        /// Search term, passed to the catalog as-is (may be empty)
        term: String,

        /// Catalog ID of the show (as listed by `search`)
        show_id: u64,

        /// Write the rendered page to this HTML file instead of printing it
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Search and browse episodes with interactive prompts
    Interactive {
        /// Rewrite the rendered page to this HTML file after every update
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Searching { term } => {
            println!("Searching TVmaze for '{}'...", term);
        }
        ProgressEvent::ShowsFound { term, count } => {
            println!("Found {} show(s) for '{}'\n", count, term);
        }
        ProgressEvent::FetchingEpisodes { show_id } => {
            println!("Fetching episodes for show {}...", show_id);
        }
        ProgressEvent::EpisodesFound { show_id, count } => {
            println!("Found {} episode(s) for show {}\n", count, show_id);
        }
        ProgressEvent::StaleResponseDiscarded { kind, sequence } => {
            println!("Ignoring outdated {:?} response #{}", kind, sequence);
        }
        ProgressEvent::RequestFailed { message } => {
            eprintln!("Request failed: {}", message);
        }
    }
}

/// Prints the visible page text, or writes the page as HTML when a path is
/// given
fn output_page(page: &Page, html: Option<&Path>) -> Result<(), ShowFinderError> {
    match html {
        Some(path) => {
            fs::write(path, page.to_html())?;
            println!("Wrote page to {}", path.display());
        }
        None => {
            println!("{}\n", page.visible_text());
        }
    }
    Ok(())
}

/// Label for a show card in the interactive selection list
fn card_label(card: &Element) -> String {
    let name = card
        .find_all_by_class("text-primary")
        .first()
        .map(|title| title.text_content())
        .unwrap_or_default();
    let id = card.attr(SHOW_ID_ATTR).unwrap_or("?");

    format!("{} (#{})", name, id)
}

/// Catalog failures reach the user through `ProgressEvent::RequestFailed`
fn already_reported(error: &ControllerError) -> bool {
    matches!(error, ControllerError::Catalog(_))
}

/// Prints an interaction error unless it was already reported
fn report_interaction_error(error: &ControllerError) {
    if !already_reported(error) {
        eprintln!("Error: {}", error);
    }
}

fn run_interactive(
    browser: &mut ShowBrowser<TvMazeCatalog>,
    html: Option<&Path>,
) -> Result<(), ShowFinderError> {
    loop {
        let term: String = Input::new()
            .with_prompt("Search for a show")
            .allow_empty(true)
            .interact_text()?;

        browser.set_search_term(&term);
        if let Err(e) = browser.submit_search(handle_progress_event) {
            report_interaction_error(&e);
            continue;
        }
        output_page(browser.page(), html)?;

        loop {
            // Only visible cards can be clicked
            let cards: Vec<(usize, String)> = browser
                .page()
                .shows_list()
                .children()
                .enumerate()
                .filter(|(_, card)| !card.is_hidden())
                .map(|(index, card)| (index, card_label(card)))
                .collect();

            let mut items: Vec<String> = cards
                .iter()
                .map(|(_, label)| format!("Episodes of {}", label))
                .collect();
            items.push("New search".to_string());
            items.push("Quit".to_string());

            let selection = Select::new()
                .with_prompt("What next?")
                .items(&items)
                .default(0)
                .interact()?;

            match cards.get(selection) {
                Some((card_index, _)) => {
                    if let Err(e) = browser.click_episodes(*card_index, handle_progress_event) {
                        report_interaction_error(&e);
                        continue;
                    }
                    output_page(browser.page(), html)?;
                }
                None if selection == cards.len() => break,
                None => return Ok(()),
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), ShowFinderError> {
    let mut browser = ShowBrowser::new(TvMazeCatalog::with_base_url(&cli.base_url));

    match cli.command {
        Command::Search { term, html } => {
            browser.set_search_term(&term);
            browser.submit_search(handle_progress_event)?;
            output_page(browser.page(), html.as_deref())
        }
        Command::Episodes {
            term,
            show_id,
            html,
        } => {
            browser.set_search_term(&term);
            browser.submit_search(handle_progress_event)?;
            browser.click_episodes_for_show(show_id, handle_progress_event)?;
            output_page(browser.page(), html.as_deref())
        }
        Command::Interactive { html } => run_interactive(&mut browser, html.as_deref()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
