//! Client for the Shortorya content API, a Directus instance serving short dramas.

mod client;
mod errors;
mod query;
mod transport;
pub mod types;
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{ApiError, Error, ErrorCode};
pub use self::query::{
    Query, QueryCommon, SortDirection, TitleGroupQuery, TitleQuery, TitleSortBy,
    DEFAULT_TITLE_LIMIT, TITLE_FIELDS, TITLE_GROUP_FIELDS,
};
pub use self::transport::intercept;
