//! Summaries of the legacy home payload.

use serde::Serialize;
use shortlovers_api::types::{ContentTab, TabContent};

/// How many drama titles a flat tab summary lists before eliding the rest.
pub const PREVIEW_TITLES: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub dramas: usize,
}

/// A one-screen description of a home tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabSummary {
    Categories {
        tab: String,
        categories: Vec<CategorySummary>,
    },
    Dramas {
        tab: String,
        total: usize,
        preview: Vec<String>,
        more: usize,
    },
    Empty {
        tab: String,
    },
}

impl TabSummary {
    pub fn tab(&self) -> &str {
        match self {
            TabSummary::Categories { tab, .. }
            | TabSummary::Dramas { tab, .. }
            | TabSummary::Empty { tab } => tab,
        }
    }
}

pub fn summarize_tab(tab: &ContentTab) -> TabSummary {
    let name = tab.tab_name.clone().unwrap_or_default();
    match &tab.content {
        TabContent::Categories(groups) if !groups.is_empty() => TabSummary::Categories {
            tab: name,
            categories: groups
                .iter()
                .map(|g| CategorySummary {
                    name: g.category_name.clone().unwrap_or_default(),
                    dramas: g.dramas.as_ref().map_or(0, Vec::len),
                })
                .collect(),
        },
        TabContent::Dramas(items) if !items.is_empty() => TabSummary::Dramas {
            tab: name,
            total: items.len(),
            preview: items
                .iter()
                .take(PREVIEW_TITLES)
                .map(|d| d.title.clone().unwrap_or_default())
                .collect(),
            more: items.len().saturating_sub(PREVIEW_TITLES),
        },
        _ => TabSummary::Empty { tab: name },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn categories_summary_counts_dramas() {
        let tab = ContentTab::from_value(json!({
            "tab_name": "Utama",
            "data": [
                {"category_name": "Tren", "dramas": [{"id": "1"}, {"id": "2"}]},
                {"category_name": "Baru", "dramas": null}
            ]
        }))
        .unwrap();
        assert_eq!(
            summarize_tab(&tab),
            TabSummary::Categories {
                tab: "Utama".to_string(),
                categories: vec![
                    CategorySummary {
                        name: "Tren".to_string(),
                        dramas: 2
                    },
                    CategorySummary {
                        name: "Baru".to_string(),
                        dramas: 0
                    },
                ],
            }
        );
    }

    #[test]
    fn dramas_summary_previews_three() {
        let tab = ContentTab::from_value(json!({
            "tab_name": "Semua",
            "data": [
                {"title": "A"}, {"title": "B"}, {"title": "C"}, {"title": "D"}, {"title": "E"}
            ]
        }))
        .unwrap();
        match summarize_tab(&tab) {
            TabSummary::Dramas {
                total,
                preview,
                more,
                ..
            } => {
                assert_eq!(total, 5);
                assert_eq!(preview, vec!["A", "B", "C"]);
                assert_eq!(more, 2);
            }
            other => panic!("unexpected summary {:?}", other),
        }
    }

    #[test]
    fn empty_tab_summary() {
        let tab = ContentTab::from_value(json!({"tab_name": "Populer", "data": []})).unwrap();
        assert_eq!(
            summarize_tab(&tab),
            TabSummary::Empty {
                tab: "Populer".to_string()
            }
        );
    }
}
