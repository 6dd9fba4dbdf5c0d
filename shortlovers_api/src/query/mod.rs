//! Request catalog: one query builder per remote collection.
//!
//! Builders only describe endpoint parameters. Retries and caching are not
//! done here; callers route requests through their own error boundary.

mod common;
pub use self::common::{Query, QueryCommon, SortDirection};

mod title_group;
pub use self::title_group::{TitleGroupQuery, TITLE_GROUP_FIELDS};

mod title;
pub use self::title::{TitleQuery, TitleSortBy, DEFAULT_TITLE_LIMIT, TITLE_FIELDS};
