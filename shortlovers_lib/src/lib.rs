//! Application layer for ShortLovers: the network error boundary, browse tabs,
//! and the session state the screens render.
//!
//! Wraps the `shortlovers_api` crate so that callers only ever see
//! [`NetworkResult`] values for remote reads.

pub mod client;
pub mod error;
pub mod home;
pub mod invoker;
pub mod session;
pub mod source;
pub mod tabs;
pub mod validation;

pub use shortlovers_api;
pub use shortlovers_api::types;
pub use shortlovers_api::{
    ApiError, ClientConfig, ErrorCode, Query, SortDirection, TitleGroupQuery, TitleQuery,
    TitleSortBy,
};

pub use client::SafeClient;
pub use error::ShortloversError;
pub use home::{summarize_tab, CategorySummary, TabSummary};
pub use invoker::{invoke, CallFailure, NetworkResult};
pub use session::{present_error, BrowseSession, BrowseState, ScreenView, TabLoad};
pub use source::ContentSource;
pub use tabs::{build_tabs, TabItem};
