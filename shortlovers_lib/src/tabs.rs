//! Browse tabs: one per title group, preceded by a synthetic "latest" tab.

use serde::Serialize;
use shortlovers_api::types::TitleGroup;
use shortlovers_api::{Query, TitleQuery, TitleSortBy, DEFAULT_TITLE_LIMIT};

/// Display name of the latest-titles tab.
pub const LATEST_TAB_NAME: &str = "Terbaru";
pub const LATEST_TAB_KEY: &str = "latest";

/// A selectable tab in the content browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabItem {
    /// Newest titles across all groups.
    Latest,
    /// Titles of a single group.
    Group(TitleGroup),
}

impl TabItem {
    pub fn name(&self) -> &str {
        match self {
            TabItem::Latest => LATEST_TAB_NAME,
            TabItem::Group(group) => &group.name,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            TabItem::Latest => LATEST_TAB_KEY,
            TabItem::Group(group) => &group.key,
        }
    }

    /// The titles request backing this tab.
    pub fn query(&self, limit: Option<i64>) -> TitleQuery {
        let query = TitleQuery::default().with_limit(limit.unwrap_or(DEFAULT_TITLE_LIMIT));
        match self {
            TabItem::Latest => query.with_sort_by(TitleSortBy::DateCreated),
            TabItem::Group(group) => query.with_group(group.id),
        }
    }
}

/// Builds the tab bar: [`TabItem::Latest`] first, then the groups in server order.
pub fn build_tabs(groups: Vec<TitleGroup>) -> Vec<TabItem> {
    std::iter::once(TabItem::Latest)
        .chain(groups.into_iter().map(TabItem::Group))
        .collect()
}
