use anyhow::{anyhow, bail, Result};
use clap::Args;
use shortlovers_lib::validation;
use shortlovers_lib::{BrowseSession, SafeClient, ScreenView, TabItem, TabLoad};

use crate::commands::{error_text, take};
use crate::output::{print_tabs, print_titles, OutputFormat};

#[derive(Args)]
pub struct BrowseArgs {
    /// Tab to open: position, name or key (defaults to the latest titles)
    #[arg(long)]
    pub tab: Option<String>,

    /// Titles fetched for the tab
    #[arg(long, default_value = "50")]
    pub limit: i64,

    /// Only list the available tabs
    #[arg(long)]
    pub list: bool,
}

pub async fn run(args: &BrowseArgs, client: &SafeClient, format: OutputFormat) -> Result<()> {
    let limit = validation::validate_limit(args.limit)?;
    let session = BrowseSession::new(client.clone()).with_limit(limit);

    let tabs = take(session.load_tabs().await)?;
    if args.list {
        return print_tabs(&tabs, format);
    }

    let index = match &args.tab {
        Some(wanted) => find_tab(&tabs, wanted)
            .ok_or_else(|| anyhow!("no tab matching '{}'; see `browse --list`", wanted))?,
        None => 0,
    };

    match session.select_tab(index).await? {
        TabLoad::Applied(result) => {
            take(result)?;
        }
        TabLoad::Superseded => bail!("tab load was superseded"),
    }

    let state = session.state();
    match state.view() {
        ScreenView::Content => {}
        ScreenView::Empty => {
            eprintln!("Nothing to show.");
            return Ok(());
        }
        ScreenView::Loading => bail!("tab is still loading"),
        ScreenView::Offline | ScreenView::Failed(_) => {
            let message = state.error.as_ref().map(error_text).unwrap_or_default();
            bail!("{}", message);
        }
    }

    if let Some(tab) = state.selected() {
        match state.total_count {
            Some(total) => eprintln!("{}: {} of {} titles", tab.name(), state.titles.len(), total),
            None => eprintln!("{}: {} titles", tab.name(), state.titles.len()),
        }
    }
    if !state.featured.is_empty() {
        let featured: Vec<&str> = state
            .featured
            .iter()
            .filter_map(|t| t.title.as_deref())
            .collect();
        eprintln!("Featured: {}", featured.join(" | "));
    }

    print_titles(&state.titles, client.source().base_url(), format)
}

/// Resolves a tab by position, then by name or key (case-insensitive).
fn find_tab(tabs: &[TabItem], wanted: &str) -> Option<usize> {
    if let Ok(index) = wanted.parse::<usize>() {
        return (index < tabs.len()).then_some(index);
    }
    tabs.iter().position(|t| {
        t.name().eq_ignore_ascii_case(wanted) || t.key().eq_ignore_ascii_case(wanted)
    })
}
