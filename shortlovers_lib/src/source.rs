//! The seam between application code and the concrete API client.

use async_trait::async_trait;
use shortlovers_api::types::{ContentTab, ResponseEnvelope, Title, TitleGroup};
use shortlovers_api::{Client, TitleGroupQuery, TitleQuery};

use crate::invoker::CallFailure;

/// Anything that can answer the app's remote reads.
///
/// [`Client`] is the production implementation; tests substitute in-memory
/// sources.
#[async_trait]
pub trait ContentSource: Send + Sync + 'static {
    async fn title_groups(
        &self,
        query: &TitleGroupQuery,
    ) -> Result<ResponseEnvelope<Vec<TitleGroup>>, CallFailure>;

    async fn titles(&self, query: &TitleQuery)
        -> Result<ResponseEnvelope<Vec<Title>>, CallFailure>;

    async fn home(&self) -> Result<ResponseEnvelope<Vec<ContentTab>>, CallFailure>;

    /// Full URL of a file asset.
    fn asset_url(&self, asset_id: &str) -> String;
}

#[async_trait]
impl ContentSource for Client {
    async fn title_groups(
        &self,
        query: &TitleGroupQuery,
    ) -> Result<ResponseEnvelope<Vec<TitleGroup>>, CallFailure> {
        Ok(self.get_title_groups(query).await?)
    }

    async fn titles(
        &self,
        query: &TitleQuery,
    ) -> Result<ResponseEnvelope<Vec<Title>>, CallFailure> {
        Ok(self.get_titles(query).await?)
    }

    async fn home(&self) -> Result<ResponseEnvelope<Vec<ContentTab>>, CallFailure> {
        Ok(self.get_home().await?)
    }

    fn asset_url(&self, asset_id: &str) -> String {
        Client::asset_url(self, asset_id)
    }
}
