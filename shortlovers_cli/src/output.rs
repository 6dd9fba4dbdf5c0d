use anyhow::{bail, Result};
use serde::Serialize;
use shortlovers_lib::types::{asset_url, Title, TitleGroup};
use shortlovers_lib::{CategorySummary, TabItem, TabSummary};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => bail!(
                "unknown output format '{}'. Valid formats: table, json, csv, markdown",
                other
            ),
        }
    }
}

#[derive(Tabled, Serialize)]
struct GroupRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
}

#[derive(Tabled, Serialize)]
struct TitleRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Episodes")]
    #[serde(rename = "Episodes")]
    episodes: String,
    #[tabled(rename = "Views")]
    #[serde(rename = "Views")]
    views: String,
    #[tabled(rename = "Bookmarks")]
    #[serde(rename = "Bookmarks")]
    bookmarks: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
    #[tabled(rename = "Poster")]
    #[serde(rename = "Poster")]
    poster: String,
}

#[derive(Tabled, Serialize)]
struct TabRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    index: usize,
    #[tabled(rename = "Tab")]
    #[serde(rename = "Tab")]
    name: String,
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
}

#[derive(Tabled, Serialize)]
struct HomeRow {
    #[tabled(rename = "Tab")]
    #[serde(rename = "Tab")]
    tab: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Contents")]
    #[serde(rename = "Contents")]
    contents: String,
}

// -- Row builders --

fn build_group_rows(groups: &[TitleGroup]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|g| GroupRow {
            id: g.id,
            name: g.name.clone(),
            key: g.key.clone(),
        })
        .collect()
}

fn build_title_rows(titles: &[Title], base_url: &str) -> Vec<TitleRow> {
    titles
        .iter()
        .map(|t| TitleRow {
            id: t.id,
            title: t.title.clone().unwrap_or_default(),
            episodes: t.episode_count.map(|n| n.to_string()).unwrap_or_default(),
            views: t.view_count.map(format_count).unwrap_or_default(),
            bookmarks: t.bookmark_count.map(format_count).unwrap_or_default(),
            created: t
                .date_created
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            poster: t
                .poster
                .as_deref()
                .map(|id| asset_url(base_url, id))
                .unwrap_or_default(),
        })
        .collect()
}

fn build_tab_rows(tabs: &[TabItem]) -> Vec<TabRow> {
    tabs.iter()
        .enumerate()
        .map(|(index, tab)| TabRow {
            index,
            name: tab.name().to_string(),
            key: tab.key().to_string(),
        })
        .collect()
}

fn build_home_rows(summaries: &[TabSummary]) -> Vec<HomeRow> {
    summaries
        .iter()
        .map(|s| {
            let (kind, contents) = match s {
                TabSummary::Categories { categories, .. } => {
                    ("categories", format_categories(categories))
                }
                TabSummary::Dramas { preview, more, .. } => {
                    let mut contents = preview.join(", ");
                    if *more > 0 {
                        contents.push_str(&format!(" ... and {} more", more));
                    }
                    ("dramas", contents)
                }
                TabSummary::Empty { .. } => ("empty", String::new()),
            };
            HomeRow {
                tab: s.tab().to_string(),
                kind: kind.to_string(),
                contents,
            }
        })
        .collect()
}

fn format_categories(categories: &[CategorySummary]) -> String {
    categories
        .iter()
        .map(|c| format!("{} ({})", c.name, c.dramas))
        .collect::<Vec<_>>()
        .join(", ")
}

// -- Rendering --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_groups(groups: &[TitleGroup], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&groups);
            Ok(())
        }
        _ => print_rows(build_group_rows(groups), format),
    }
}

pub fn print_titles(titles: &[Title], base_url: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&titles);
            Ok(())
        }
        _ => print_rows(build_title_rows(titles, base_url), format),
    }
}

pub fn print_tabs(tabs: &[TabItem], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&tabs);
            Ok(())
        }
        _ => print_rows(build_tab_rows(tabs), format),
    }
}

pub fn print_home(summaries: &[TabSummary], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&summaries);
            Ok(())
        }
        _ => print_rows(build_home_rows(summaries), format),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_count(value: i64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}
