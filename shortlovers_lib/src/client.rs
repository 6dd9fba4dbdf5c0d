//! Client wrapper whose every call goes through [`invoke`].

use std::sync::Arc;

use shortlovers_api::types::{ContentTab, ResponseEnvelope, Title, TitleGroup};
use shortlovers_api::{Client, ClientConfig, TitleGroupQuery, TitleQuery};

use crate::error::ShortloversError;
use crate::invoker::{invoke, NetworkResult};
use crate::source::ContentSource;

/// API client wrapper that never fails with an error type.
///
/// Each method runs one request through [`invoke`] and returns a
/// [`NetworkResult`]. There is no caching and no retrying: two calls make two
/// requests, and a failure is reported once. Clones share the same source.
pub struct SafeClient<S: ContentSource = Client> {
    inner: Arc<S>,
}

impl<S: ContentSource> Clone for SafeClient<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SafeClient<Client> {
    /// Creates a client using the production API URL.
    pub fn new() -> Result<Self, ShortloversError> {
        Ok(Self::from_source(Client::new()?))
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, ShortloversError> {
        Ok(Self::from_source(Client::with_base_url(base_url)?))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ShortloversError> {
        Ok(Self::from_source(Client::with_config(config)?))
    }
}

impl<S: ContentSource> SafeClient<S> {
    pub fn from_source(source: S) -> Self {
        Self {
            inner: Arc::new(source),
        }
    }

    pub fn source(&self) -> &S {
        &self.inner
    }

    /// Fetches the published title groups.
    pub async fn title_groups(
        &self,
        query: &TitleGroupQuery,
    ) -> NetworkResult<ResponseEnvelope<Vec<TitleGroup>>> {
        let source = Arc::clone(&self.inner);
        let query = query.clone();
        invoke(move || async move { source.title_groups(&query).await }).await
    }

    /// Fetches titles matching the query.
    pub async fn titles(&self, query: &TitleQuery) -> NetworkResult<ResponseEnvelope<Vec<Title>>> {
        let source = Arc::clone(&self.inner);
        let query = query.clone();
        invoke(move || async move { source.titles(&query).await }).await
    }

    /// Fetches the legacy home payload.
    pub async fn home(&self) -> NetworkResult<ResponseEnvelope<Vec<ContentTab>>> {
        let source = Arc::clone(&self.inner);
        invoke(move || async move { source.home().await }).await
    }

    pub fn asset_url(&self, asset_id: &str) -> String {
        self.inner.asset_url(asset_id)
    }
}
