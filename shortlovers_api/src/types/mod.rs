mod meta;
pub use self::meta::{Meta, ResponseEnvelope};

mod error;
pub use self::error::{ErrorEntry, ErrorEnvelope, ErrorExtensions};

mod content;
pub use self::content::{CategoryGroup, ContentItem, ContentItemCategory, ContentTab, TabContent};

mod title;
pub use self::title::{asset_url, Title, TitleGroup, TitleGroupID, TitleID};
