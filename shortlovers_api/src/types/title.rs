use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type TitleID = i64;
pub type TitleGroupID = i64;

/// A drama or series from the `titles` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: TitleID,

    #[serde(default)]
    pub title: Option<String>,

    /// Asset id of the poster image. See [`Title::poster_url`].
    #[serde(default)]
    pub poster: Option<String>,

    #[serde(default)]
    pub synopsis: Option<String>,

    #[serde(default)]
    pub view_count: Option<i64>,

    #[serde(default)]
    pub bookmark_count: Option<i64>,

    #[serde(default)]
    pub episode_count: Option<i64>,

    /// Directus sends `timestamp` fields with an offset and `dateTime` fields
    /// without one; the latter are read as UTC. Any other value reads as `None`.
    #[serde(default, deserialize_with = "timestamp")]
    pub date_created: Option<DateTime<Utc>>,
}

impl Title {
    /// Full URL of the poster, if one is set.
    pub fn poster_url(&self, base_url: &str) -> Option<String> {
        self.poster.as_deref().map(|id| asset_url(base_url, id))
    }
}

/// A row of the `title_groups` collection. Each group becomes a browse tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleGroup {
    pub id: TitleGroupID,
    pub name: String,
    pub key: String,
}

fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    match NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Ok(Some(naive.and_utc())),
        Err(e) => {
            tracing::debug!("Ignoring unparseable date_created {:?}: {}", raw, e);
            Ok(None)
        }
    }
}

/// URL of a Directus file asset.
pub fn asset_url(base_url: &str, asset_id: &str) -> String {
    format!("{}/assets/{}", base_url.trim_end_matches('/'), asset_id)
}
