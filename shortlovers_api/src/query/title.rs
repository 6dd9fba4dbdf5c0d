use std::str::FromStr;

use url::Url;

use crate::types::TitleGroupID;

use super::common::{append_eq_filter, append_fields, Query, QueryCommon};

pub const TITLE_FIELDS: &[&str] = &[
    "id",
    "title",
    "poster",
    "synopsis",
    "view_count",
    "bookmark_count",
    "episode_count",
    "date_created",
];

pub const DEFAULT_TITLE_LIMIT: i64 = 50;

/// Query for `/items/titles`.
///
/// Defaults: published Indonesian titles, no group filter, no explicit sort,
/// 50 items, with `filter_count` and `total_count` requested in `meta`.
#[derive(Clone, Debug)]
pub struct TitleQuery {
    pub common: QueryCommon,
    pub status: String,
    pub language: String,
    pub group: Option<TitleGroupID>,
    pub sort_by: Option<TitleSortBy>,
}

impl Default for TitleQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon {
                limit: Some(DEFAULT_TITLE_LIMIT),
                counts: true,
                ..QueryCommon::default()
            },
            status: "published".to_string(),
            language: "id".to_string(),
            group: None,
            sort_by: None,
        }
    }
}

impl Query for TitleQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        append_fields(&mut url, TITLE_FIELDS);
        append_eq_filter(&mut url, "status", &self.status);
        append_eq_filter(&mut url, "language", &self.language);
        if let Some(group) = self.group {
            append_eq_filter(&mut url, "group", &group.to_string());
        }
        if let Some(sort_by) = self.sort_by {
            url.query_pairs_mut().append_pair(
                "sort",
                format!("{}{}", self.common.sort_direction.prefix(), sort_by).as_str(),
            );
        }
        self.common.add_to_url(&url)
    }
}

impl TitleQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_group(mut self, group: TitleGroupID) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_sort_by(mut self, sort_by: TitleSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// Sortable fields of the `titles` collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleSortBy {
    DateCreated,
    ViewCount,
    BookmarkCount,
    EpisodeCount,
    Title,
}

impl std::fmt::Display for TitleSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TitleSortBy::DateCreated => "date_created",
                TitleSortBy::ViewCount => "view_count",
                TitleSortBy::BookmarkCount => "bookmark_count",
                TitleSortBy::EpisodeCount => "episode_count",
                TitleSortBy::Title => "title",
            }
        )?;
        Ok(())
    }
}

impl FromStr for TitleSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_created" => Ok(TitleSortBy::DateCreated),
            "view_count" => Ok(TitleSortBy::ViewCount),
            "bookmark_count" => Ok(TitleSortBy::BookmarkCount),
            "episode_count" => Ok(TitleSortBy::EpisodeCount),
            "title" => Ok(TitleSortBy::Title),
            _ => Err(()),
        }
    }
}
