use anyhow::{bail, Result};
use clap::Args;
use shortlovers_lib::types::ContentTab;
use shortlovers_lib::{summarize_tab, SafeClient, TabSummary};

use crate::commands::take;
use crate::output::{print_home, print_json, OutputFormat};

#[derive(Args)]
pub struct HomeArgs {
    /// Only show the tab with this name (case-insensitive)
    #[arg(long)]
    pub tab: Option<String>,

    /// Print the home payload as JSON instead of per-tab summaries
    #[arg(long)]
    pub raw: bool,
}

pub async fn run(args: &HomeArgs, client: &SafeClient, format: OutputFormat) -> Result<()> {
    let resp = take(client.home().await)?;
    let tabs: Vec<&ContentTab> = resp
        .items()
        .iter()
        .filter(|t| match &args.tab {
            Some(name) => t
                .tab_name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name)),
            None => true,
        })
        .collect();

    if tabs.is_empty() {
        if let Some(name) = &args.tab {
            bail!("no home tab named '{}'", name);
        }
    }

    if args.raw {
        print_json(&tabs);
        return Ok(());
    }

    let summaries: Vec<TabSummary> = tabs.into_iter().map(summarize_tab).collect();
    eprintln!("{} home tabs", summaries.len());
    print_home(&summaries, format)
}
