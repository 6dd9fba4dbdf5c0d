use anyhow::Result;
use clap::Args;
use shortlovers_lib::{SafeClient, TitleGroupQuery};

use crate::commands::take;
use crate::output::{print_groups, OutputFormat};

#[derive(Args)]
pub struct GroupsArgs {
    /// Publication status to list
    #[arg(long, default_value = "published")]
    pub status: String,
}

pub async fn run(args: &GroupsArgs, client: &SafeClient, format: OutputFormat) -> Result<()> {
    let query = TitleGroupQuery::default().with_status(&args.status);
    let resp = take(client.title_groups(&query).await)?;

    eprintln!("{} title groups", resp.items().len());
    print_groups(resp.items(), format)
}
