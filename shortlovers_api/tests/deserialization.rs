use shortlovers_api::types::{ContentTab, Meta, ResponseEnvelope, TabContent, Title, TitleGroup};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_titles_full() {
    let json = load_fixture("titles.json");
    let resp: ResponseEnvelope<Vec<Title>> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items().len(), 2);
    assert_eq!(resp.meta.as_ref().unwrap().filter_count, Some(2));
    assert_eq!(resp.total_count(), Some(42));

    let title = &resp.items()[0];
    assert_eq!(title.id, 101);
    assert_eq!(title.title.as_deref(), Some("Istri Rahasia CEO"));
    assert_eq!(title.view_count, Some(15230));
    assert_eq!(title.bookmark_count, Some(812));
    assert_eq!(title.episode_count, Some(60));
    assert_eq!(
        title.poster_url("https://app.shortorya.com").as_deref(),
        Some("https://app.shortorya.com/assets/3f1c2a9e-7b7d-4c61-9a8e-5d2f0b6c1e11")
    );

    let second = &resp.items()[1];
    assert!(second.poster.is_none());
    assert!(second.bookmark_count.is_none());
    assert!(second.date_created.is_some());
}

#[test]
fn deserialize_title_groups() {
    let json = load_fixture("title_groups.json");
    let resp: ResponseEnvelope<Vec<TitleGroup>> = serde_json::from_str(&json).unwrap();
    assert_eq!(
        resp.items()[0],
        TitleGroup {
            id: 1,
            name: "Populer".to_string(),
            key: "popular".to_string(),
        }
    );
}

#[test]
fn deserialize_home_tabs() {
    let json = load_fixture("home.json");
    let resp: ResponseEnvelope<Vec<ContentTab>> = serde_json::from_str(&json).unwrap();
    let tabs = resp.items();

    let utama = &tabs[0];
    assert_eq!(utama.tab_name.as_deref(), Some("Utama"));
    let groups = utama.categories().unwrap();
    assert_eq!(groups[0].category_name.as_deref(), Some("Sedang Tren"));
    let dramas = groups[0].dramas.as_ref().unwrap();
    assert_eq!(dramas[0].cover_link.as_deref(), Some("https://cdn.example.com/a1.jpg"));
    assert_eq!(
        dramas[1].cover.as_deref(),
        Some("9b0f1d2e-1111-2222-3333-444455556666")
    );
    assert!(utama.dramas().is_none());

    let semua = &tabs[1];
    assert!(matches!(semua.content, TabContent::Dramas(ref items) if items.len() == 2));
    assert!(semua.categories().is_none());

    let populer = &tabs[2];
    assert_eq!(populer.categories(), Some(&[][..]));
}

#[test]
fn missing_data_means_no_content() {
    let resp: ResponseEnvelope<Vec<Title>> = serde_json::from_str("{}").unwrap();
    assert!(resp.data.is_none());
    assert!(resp.items().is_empty());
    assert!(resp.total_count().is_none());
}

#[test]
fn envelope_round_trip_keeps_total_count() {
    let json = load_fixture("titles.json");
    let resp: ResponseEnvelope<Vec<Title>> = serde_json::from_str(&json).unwrap();
    let encoded = serde_json::to_string(&resp).unwrap();
    let decoded: ResponseEnvelope<Vec<Title>> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.total_count(), Some(42));
    assert_eq!(decoded, resp);
}

#[test]
fn meta_without_counts_is_omitted_on_encode() {
    let resp: ResponseEnvelope<Vec<TitleGroup>> = ResponseEnvelope {
        meta: Some(Meta::default()),
        data: None,
    };
    assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"meta":{}}"#);
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<ResponseEnvelope<Vec<Title>>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"data": [{"title": "no id"}]}"#;
    let result = serde_json::from_str::<ResponseEnvelope<Vec<Title>>>(json);
    assert!(result.is_err());
}
