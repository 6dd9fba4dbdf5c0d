//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for paging and sort direction.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Caps the number of returned items.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the page number (1-indexed). Directus derives the offset from `limit`.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Asks the server to include `meta.filter_count` and `meta.total_count`.
    fn with_counts(mut self) -> Self
    where
        Self: Sized,
    {
        self.get_common().counts = true;
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = sort_direction;
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first).
    Asc = 0,
    /// Descending order (newest/largest first). This is the default.
    #[default]
    Desc = 1,
}

impl SortDirection {
    /// Directus marks descending sorts with a leading `-`.
    pub fn prefix(&self) -> &'static str {
        match self {
            SortDirection::Asc => "",
            SortDirection::Desc => "-",
        }
    }
}

/// Fields shared by all query types: paging, count metadata, and sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Maximum items returned. `None` uses the server default.
    pub limit: Option<i64>,
    /// Page number (1-indexed). `None` means the first page.
    pub page: Option<i64>,
    /// Request `meta=filter_count,total_count`.
    pub counts: bool,
    /// Sort direction. Defaults to descending.
    pub sort_direction: SortDirection,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            limit: None,
            page: None,
            counts: false,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl QueryCommon {
    /// Appends the common paging and meta parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(page) = self.page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        };
        if self.counts {
            url.query_pairs_mut()
                .append_pair("meta", "filter_count,total_count");
        };
        url
    }
}

/// Appends `fields=a,b,c`.
pub(crate) fn append_fields(url: &mut Url, fields: &[&str]) {
    url.query_pairs_mut()
        .append_pair("fields", fields.join(",").as_str());
}

/// Appends `filter[<field>][_eq]=<value>`.
pub(crate) fn append_eq_filter(url: &mut Url, field: &str, value: &str) {
    url.query_pairs_mut()
        .append_pair(format!("filter[{}][_eq]", field).as_str(), value);
}
