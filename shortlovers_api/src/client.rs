//! HTTP client for the Shortorya Directus API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, TitleGroupQuery, TitleQuery},
    transport::{intercept, truncate_body},
    types::{asset_url, ContentTab, ResponseEnvelope, Title, TitleGroup},
    Error,
};

pub const DEFAULT_BASE_URL: &str = "https://app.shortorya.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Static client settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,
    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// Time allowed for the whole request, including reading the body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the Shortorya Directus API.
///
/// Cheap to clone: clones share one connection pool. Every non-success
/// response goes through [`intercept`] and comes back as [`Error::Api`].
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            base_api_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Full URL of a file asset such as a poster or cover.
    pub fn asset_url(&self, asset_id: &str) -> String {
        asset_url(&self.base_api_url, asset_id)
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        intercept(status, &body)?;

        let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e)
        })?;

        Ok(parsed)
    }

    /// Fetches the published title groups. Each group backs one browse tab.
    pub async fn get_title_groups(
        &self,
        query: &TitleGroupQuery,
    ) -> Result<ResponseEnvelope<Vec<TitleGroup>>, Error> {
        self.get::<ResponseEnvelope<Vec<TitleGroup>>, TitleGroupQuery>(
            "/items/title_groups",
            Some(query),
        )
        .await
    }

    /// Fetches titles matching the given query.
    pub async fn get_titles(
        &self,
        query: &TitleQuery,
    ) -> Result<ResponseEnvelope<Vec<Title>>, Error> {
        self.get::<ResponseEnvelope<Vec<Title>>, TitleQuery>("/items/titles", Some(query))
            .await
    }

    /// Fetches the legacy combined home payload.
    pub async fn get_home(&self) -> Result<ResponseEnvelope<Vec<ContentTab>>, Error> {
        self.get::<ResponseEnvelope<Vec<ContentTab>>, TitleQuery>("/custom/pages/home", None)
            .await
    }
}
