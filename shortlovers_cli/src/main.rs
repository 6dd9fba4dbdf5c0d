mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shortlovers_lib::{ClientConfig, SafeClient};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "shortlovers")]
#[command(about = "Browse the ShortLovers short drama catalogue")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (defaults to SHORTLOVERS_BASE_URL, then the production API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List title groups
    Groups(commands::groups::GroupsArgs),
    /// List titles
    Titles(commands::titles::TitlesArgs),
    /// Summarize the home page tabs
    Home(commands::home::HomeArgs),
    /// Open a browse tab the way the app does
    Browse(commands::browse::BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shortlovers=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format: OutputFormat = cli.output.parse()?;

    let client = SafeClient::with_config(client_config(cli.base_url.as_deref()))?;

    match &cli.command {
        Commands::Groups(args) => commands::groups::run(args, &client, format).await?,
        Commands::Titles(args) => commands::titles::run(args, &client, format).await?,
        Commands::Home(args) => commands::home::run(args, &client, format).await?,
        Commands::Browse(args) => commands::browse::run(args, &client, format).await?,
    }

    Ok(())
}

fn client_config(base_url: Option<&str>) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(url) = base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SHORTLOVERS_BASE_URL").ok())
    {
        config.base_url = url;
    }
    if let Some(secs) = env_u64("SHORTLOVERS_TIMEOUT_SECS") {
        config.connect_timeout = Duration::from_secs(secs);
        config.timeout = Duration::from_secs(secs);
    }
    config
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
}
