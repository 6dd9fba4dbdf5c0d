use anyhow::Result;
use clap::Args;
use shortlovers_lib::validation;
use shortlovers_lib::{Query, SafeClient, TitleQuery};

use crate::commands::take;
use crate::output::{print_titles, OutputFormat};

#[derive(Args)]
pub struct TitlesArgs {
    /// Only titles of this group id
    #[arg(long)]
    pub group: Option<i64>,

    /// Sort key: date_created, view_count, bookmark_count, episode_count, title.
    /// Prefix with '-' for descending (e.g. -view_count)
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Content language
    #[arg(long, default_value = "id")]
    pub language: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "50")]
    pub limit: i64,
}

pub async fn run(args: &TitlesArgs, client: &SafeClient, format: OutputFormat) -> Result<()> {
    let mut query = TitleQuery::default()
        .with_language(&args.language)
        .with_limit(validation::validate_limit(args.limit)?)
        .with_page(validation::validate_page(args.page)?);

    if let Some(group) = args.group {
        query = query.with_group(validation::validate_group_id(group)?);
    }

    if let Some(ref sort) = args.sort {
        let (sort_by, direction) = validation::validate_sort(sort)?;
        query = query.with_sort_by(sort_by).with_sort_direction(direction);
    }

    let resp = take(client.titles(&query).await)?;

    match resp.total_count() {
        Some(total) => eprintln!(
            "Page {} ({} shown, {} total titles)",
            args.page,
            resp.items().len(),
            total
        ),
        None => eprintln!("Page {} ({} titles)", args.page, resp.items().len()),
    }

    print_titles(resp.items(), client.source().base_url(), format)
}
