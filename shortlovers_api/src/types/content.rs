//! Payload of the legacy `/custom/pages/home` endpoint.
//!
//! Each tab object carries a `data` list whose element shape depends on the tab:
//! "Utama", "Terbaru" and "Populer" send category groups, "Semua" sends a flat
//! list of dramas. [`ContentTab`] resolves this at decode time into
//! [`TabContent`].

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One drama as it appears in the home payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cover_link: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub category: Option<ContentItemCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItemCategory {
    #[serde(default)]
    pub name: Option<String>,
}

/// A named row of dramas inside a categorized tab.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub dramas: Option<Vec<ContentItem>>,
}

/// What a tab holds. Exactly one shape per tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TabContent {
    Categories(Vec<CategoryGroup>),
    Dramas(Vec<ContentItem>),
}

/// One tab of the home payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentTab {
    pub tab_name: Option<String>,
    pub content: TabContent,
}

impl ContentTab {
    /// Decodes a tab from its JSON object.
    ///
    /// The shape of `data` is decided by its first element only: if that element
    /// has a `category_name` key the whole list is read as [`CategoryGroup`]s,
    /// otherwise as [`ContentItem`]s. Later elements are not checked against the
    /// first, so a mixed list either fails to decode or loses fields. An absent
    /// or empty list yields empty categories.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let raw: RawTab = serde_json::from_value(value)?;
        raw.resolve()
    }

    /// Category groups, when this is a categorized tab.
    pub fn categories(&self) -> Option<&[CategoryGroup]> {
        match &self.content {
            TabContent::Categories(groups) => Some(groups),
            TabContent::Dramas(_) => None,
        }
    }

    /// Dramas, when this is a flat tab.
    pub fn dramas(&self) -> Option<&[ContentItem]> {
        match &self.content {
            TabContent::Dramas(items) => Some(items),
            TabContent::Categories(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.content {
            TabContent::Categories(groups) => groups.is_empty(),
            TabContent::Dramas(items) => items.is_empty(),
        }
    }
}

#[derive(Deserialize)]
struct RawTab {
    #[serde(default)]
    tab_name: Option<String>,
    #[serde(default)]
    data: Option<Vec<Value>>,
}

impl RawTab {
    fn resolve(self) -> Result<ContentTab, serde_json::Error> {
        let data = match self.data {
            Some(data) if !data.is_empty() => data,
            _ => {
                return Ok(ContentTab {
                    tab_name: self.tab_name,
                    content: TabContent::Categories(Vec::new()),
                })
            }
        };

        let is_category = data[0].get("category_name").is_some();
        tracing::debug!(
            "Tab {:?}: {} elements decoded as {}",
            self.tab_name,
            data.len(),
            if is_category { "categories" } else { "dramas" }
        );

        let content = if is_category {
            TabContent::Categories(serde_json::from_value(Value::Array(data))?)
        } else {
            TabContent::Dramas(serde_json::from_value(Value::Array(data))?)
        };
        Ok(ContentTab {
            tab_name: self.tab_name,
            content,
        })
    }
}

impl<'de> Deserialize<'de> for ContentTab {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawTab::deserialize(deserializer)?
            .resolve()
            .map_err(de::Error::custom)
    }
}

impl Serialize for ContentTab {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Out<'a> {
            tab_name: &'a Option<String>,
            data: &'a TabContent,
        }
        Out {
            tab_name: &self.tab_name,
            data: &self.content,
        }
        .serialize(serializer)
    }
}

/// Accepts either a JSON string or number for id-like fields.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            return Err(de::Error::custom(format!(
                "expected string or number, got {}",
                other
            )))
        }
    })
}
