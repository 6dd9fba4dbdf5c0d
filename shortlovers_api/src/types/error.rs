use serde::{Deserialize, Serialize};

/// Body Directus sends with a non-success status.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Option<Vec<ErrorEntry>>,
}

impl ErrorEnvelope {
    pub fn first(&self) -> Option<&ErrorEntry> {
        self.errors.as_ref().and_then(|errors| errors.first())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    /// Only present for `ROUTE_NOT_FOUND`.
    #[serde(default)]
    pub path: Option<String>,
}
