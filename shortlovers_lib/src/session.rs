//! State holder for the tabbed content browser.
//!
//! A [`BrowseSession`] owns the tab bar, the selected tab and the titles shown
//! for it. Tab switches may overlap: every switch takes a ticket from a
//! generation counter, and a response whose ticket is no longer the newest is
//! dropped instead of overwriting the newer tab's state. Reloading the tab bar
//! advances the counter as well.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use shortlovers_api::types::Title;
use shortlovers_api::{ApiError, ErrorCode, TitleGroupQuery};

use crate::client::SafeClient;
use crate::error::ShortloversError;
use crate::invoker::NetworkResult;
use crate::source::ContentSource;
use crate::tabs::{build_tabs, TabItem};

/// Number of titles shown in the carousel above the grid.
pub const FEATURED_COUNT: usize = 5;

/// Text of the offline view.
pub const OFFLINE_MESSAGE: &str = "Tidak ada koneksi internet. Periksa jaringan Anda lalu coba lagi.";

/// Snapshot of everything the browser screen renders.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BrowseState {
    pub tabs: Vec<TabItem>,
    pub selected_tab: usize,
    pub titles: Vec<Title>,
    pub featured: Vec<Title>,
    pub total_count: Option<i64>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// Which view the screen should show for a state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenView {
    Loading,
    /// Connectivity failure; offers a retry.
    Offline,
    /// Any other failure, with the user-facing message.
    Failed(String),
    Empty,
    Content,
}

impl BrowseState {
    pub fn view(&self) -> ScreenView {
        if self.loading {
            return ScreenView::Loading;
        }
        if let Some(err) = &self.error {
            return present_error(err);
        }
        if self.tabs.is_empty() {
            return ScreenView::Empty;
        }
        ScreenView::Content
    }

    pub fn selected(&self) -> Option<&TabItem> {
        self.tabs.get(self.selected_tab)
    }
}

/// Offline view for `NETWORK_ERROR`, generic failure view for everything else.
pub fn present_error(err: &ApiError) -> ScreenView {
    match err.code {
        ErrorCode::NetworkError => ScreenView::Offline,
        _ => ScreenView::Failed(err.user_message()),
    }
}

/// What happened to a tab load.
#[derive(Debug, PartialEq)]
pub enum TabLoad {
    /// The response was the newest one and is now in the state.
    Applied(NetworkResult<Vec<Title>>),
    /// A newer tab switch started while this one was in flight.
    Superseded,
}

pub struct BrowseSession<S: ContentSource> {
    client: SafeClient<S>,
    limit: Option<i64>,
    generation: AtomicU64,
    state: Mutex<BrowseState>,
}

impl<S: ContentSource> BrowseSession<S> {
    pub fn new(client: SafeClient<S>) -> Self {
        Self {
            client,
            limit: None,
            generation: AtomicU64::new(0),
            state: Mutex::new(BrowseState::default()),
        }
    }

    /// Caps the number of titles fetched per tab.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn client(&self) -> &SafeClient<S> {
        &self.client
    }

    fn lock(&self) -> MutexGuard<'_, BrowseState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> BrowseState {
        self.lock().clone()
    }

    pub fn clear_error(&self) {
        self.lock().error = None;
    }

    /// Fetches the title groups and rebuilds the tab bar.
    ///
    /// Any tab load still in flight is superseded, since its index may name a
    /// different tab once the bar is rebuilt.
    pub async fn load_tabs(&self) -> NetworkResult<Vec<TabItem>> {
        {
            let mut state = self.lock();
            self.generation.fetch_add(1, Ordering::SeqCst);
            state.loading = true;
            state.error = None;
        }

        let result = self
            .client
            .title_groups(&TitleGroupQuery::default())
            .await
            .map(|resp| build_tabs(resp.into_items()));

        let mut state = self.lock();
        state.loading = false;
        match &result {
            NetworkResult::Success(tabs) => {
                tracing::debug!("Loaded {} tabs", tabs.len());
                state.tabs = tabs.clone();
                if state.selected_tab >= tabs.len() {
                    state.selected_tab = 0;
                }
            }
            NetworkResult::Error(err) => state.error = Some(err.clone()),
            NetworkResult::Loading => {}
        }
        result
    }

    /// Switches to the tab at `index` and loads its titles.
    pub async fn select_tab(&self, index: usize) -> Result<TabLoad, ShortloversError> {
        let (ticket, query) = {
            let mut state = self.lock();
            let tab = state.tabs.get(index).ok_or_else(|| {
                ShortloversError::InvalidInput(format!(
                    "tab index {} out of range (0..{})",
                    index,
                    state.tabs.len()
                ))
            })?;
            let query = tab.query(self.limit);
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.selected_tab = index;
            state.loading = true;
            state.error = None;
            (ticket, query)
        };

        let result = self.client.titles(&query).await;

        let mut state = self.lock();
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Dropping stale response for tab {} (ticket {})", index, ticket);
            return Ok(TabLoad::Superseded);
        }
        state.loading = false;
        let result = match result {
            NetworkResult::Success(resp) => {
                state.total_count = resp.total_count();
                let titles = resp.into_items();
                state.featured = titles.iter().take(FEATURED_COUNT).cloned().collect();
                state.titles = titles.clone();
                NetworkResult::Success(titles)
            }
            NetworkResult::Error(err) => {
                state.titles.clear();
                state.featured.clear();
                state.total_count = None;
                state.error = Some(err.clone());
                NetworkResult::Error(err)
            }
            NetworkResult::Loading => NetworkResult::Loading,
        };
        Ok(TabLoad::Applied(result))
    }

    /// Reloads the tabs, then the titles of the selected tab.
    pub async fn refresh(&self) -> Result<TabLoad, ShortloversError> {
        match self.load_tabs().await {
            NetworkResult::Success(_) => {
                let index = self.lock().selected_tab;
                self.select_tab(index).await
            }
            NetworkResult::Error(err) => Ok(TabLoad::Applied(NetworkResult::Error(err))),
            NetworkResult::Loading => Ok(TabLoad::Applied(NetworkResult::Loading)),
        }
    }

    pub fn asset_url(&self, asset_id: &str) -> String {
        self.client.asset_url(asset_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_shows_offline_view() {
        let err = ApiError::new(ErrorCode::NetworkError, "Connection timed out");
        assert_eq!(present_error(&err), ScreenView::Offline);
    }

    #[test]
    fn other_errors_show_user_message() {
        let err = ApiError::new(ErrorCode::RequestsExceeded, "Too many requests");
        assert_eq!(
            present_error(&err),
            ScreenView::Failed("Terlalu banyak permintaan. Coba lagi nanti.".to_string())
        );
    }

    #[test]
    fn view_priority() {
        let mut state = BrowseState::default();
        assert_eq!(state.view(), ScreenView::Empty);
        state.tabs = vec![TabItem::Latest];
        assert_eq!(state.view(), ScreenView::Content);
        state.error = Some(ApiError::new(ErrorCode::Forbidden, "no"));
        assert!(matches!(state.view(), ScreenView::Failed(_)));
        state.loading = true;
        assert_eq!(state.view(), ScreenView::Loading);
    }
}
