use url::Url;

use super::common::{append_eq_filter, append_fields, Query, QueryCommon};

pub const TITLE_GROUP_FIELDS: &[&str] = &["id", "name", "key"];

/// Query for `/items/title_groups`. Only published groups are returned.
#[derive(Clone, Debug)]
pub struct TitleGroupQuery {
    pub common: QueryCommon,
    pub status: String,
}

impl Default for TitleGroupQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::default(),
            status: "published".to_string(),
        }
    }
}

impl Query for TitleGroupQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        append_fields(&mut url, TITLE_GROUP_FIELDS);
        append_eq_filter(&mut url, "status", &self.status);
        self.common.add_to_url(&url)
    }
}

impl TitleGroupQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{Query, TitleGroupQuery};

    #[test]
    fn test_title_group_query() {
        let url = Url::parse("https://example.com/items/title_groups").unwrap();

        insta::assert_snapshot!(
            TitleGroupQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/items/title_groups?fields=id%2Cname%2Ckey&filter%5Bstatus%5D%5B_eq%5D=published"
        );

        insta::assert_snapshot!(
            TitleGroupQuery::default()
                .with_status("draft")
                .with_limit(5)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/items/title_groups?fields=id%2Cname%2Ckey&filter%5Bstatus%5D%5B_eq%5D=draft&limit=5"
        );
    }
}
