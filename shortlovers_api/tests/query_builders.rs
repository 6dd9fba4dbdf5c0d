use shortlovers_api::{
    Query, SortDirection, TitleGroupQuery, TitleQuery, TitleSortBy, DEFAULT_TITLE_LIMIT,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/items/titles").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn title_query_defaults() {
    let url = TitleQuery::default().add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(
        value(&pairs, "fields"),
        Some("id,title,poster,synopsis,view_count,bookmark_count,episode_count,date_created")
    );
    assert_eq!(value(&pairs, "filter[status][_eq]"), Some("published"));
    assert_eq!(value(&pairs, "filter[language][_eq]"), Some("id"));
    assert_eq!(value(&pairs, "limit"), Some("50"));
    assert_eq!(DEFAULT_TITLE_LIMIT, 50);
    assert!(value(&pairs, "filter[group][_eq]").is_none());
    assert!(value(&pairs, "sort").is_none());
    assert_eq!(value(&pairs, "meta"), Some("filter_count,total_count"));
}

#[test]
fn title_query_group_and_sort() {
    let url = TitleQuery::default()
        .with_group(7)
        .with_sort_by(TitleSortBy::ViewCount)
        .add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(value(&pairs, "filter[group][_eq]"), Some("7"));
    assert_eq!(value(&pairs, "sort"), Some("-view_count"));

    let url = TitleQuery::default()
        .with_sort_by(TitleSortBy::Title)
        .with_sort_direction(SortDirection::Asc)
        .add_to_url(&base_url());
    assert_eq!(value(&self::pairs(&url), "sort"), Some("title"));
}

#[test]
fn title_query_paging_and_counts() {
    let url = TitleQuery::default()
        .with_limit(20)
        .with_page(3)
        .with_counts()
        .add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(value(&pairs, "limit"), Some("20"));
    assert_eq!(value(&pairs, "page"), Some("3"));
    assert_eq!(value(&pairs, "meta"), Some("filter_count,total_count"));
}

#[test]
fn title_query_language_and_status_overrides() {
    let url = TitleQuery::default()
        .with_language("en")
        .with_status("archived")
        .add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(value(&pairs, "filter[language][_eq]"), Some("en"));
    assert_eq!(value(&pairs, "filter[status][_eq]"), Some("archived"));
}

#[test]
fn title_group_query_defaults() {
    let url = TitleGroupQuery::default().add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(value(&pairs, "fields"), Some("id,name,key"));
    assert_eq!(value(&pairs, "filter[status][_eq]"), Some("published"));
    assert!(value(&pairs, "limit").is_none());
}
