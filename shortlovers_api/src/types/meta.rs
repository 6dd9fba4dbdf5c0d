use serde::{Deserialize, Serialize};

/// Counts Directus attaches when `meta=` is requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

/// Outer object of every successful response.
///
/// A missing `data` field means the server had nothing to return, not that the
/// request failed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Total number of items on the server, when the meta block carried it.
    pub fn total_count(&self) -> Option<i64> {
        self.meta.as_ref().and_then(|m| m.total_count)
    }
}

impl<T> ResponseEnvelope<Vec<T>> {
    /// The payload list, empty when `data` was absent.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}
