use std::net::TcpListener;
use std::time::Duration;

use shortlovers_lib::{
    ClientConfig, ErrorCode, NetworkResult, SafeClient, TitleGroupQuery, TitleQuery,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TITLES: &str = r#"{
  "meta": {"total_count": 2},
  "data": [
    {"id": 1, "title": "Istri Rahasia CEO", "date_created": "2024-11-02T08:15:00Z"},
    {"id": 2, "title": "Pembalasan Sang Pewaris"}
  ]
}"#;

#[tokio::test]
async fn success_is_wrapped() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/titles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TITLES))
        .mount(&mock_server)
        .await;

    let client = SafeClient::with_base_url(&mock_server.uri()).unwrap();
    let result = client.titles(&TitleQuery::default()).await;

    let resp = result.data().unwrap();
    assert_eq!(resp.items().len(), 2);
    assert_eq!(resp.total_count(), Some(2));
}

#[tokio::test]
async fn api_error_from_transport_is_returned_unchanged() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/title_groups"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"errors":[{"message":"Token expired.","extensions":{"code":"TOKEN_EXPIRED"}}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = SafeClient::with_base_url(&mock_server.uri()).unwrap();
    let result = client.title_groups(&TitleGroupQuery::default()).await;

    let err = result.error().unwrap();
    assert_eq!(err.code, ErrorCode::TokenExpired);
    assert_eq!(err.message, "Token expired.");
    assert_eq!(err.http_status, Some(401));
    assert_eq!(err.user_message(), "Sesi telah berakhir. Silakan login kembali.");
}

#[tokio::test]
async fn unparseable_error_body_degrades_to_unknown() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom/pages/home"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<h1>maintenance</h1>"))
        .mount(&mock_server)
        .await;

    let client = SafeClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.home().await.error().cloned().unwrap();

    assert_eq!(err.code, ErrorCode::Unknown);
    assert_eq!(err.http_status, Some(503));
    assert_eq!(err.message, "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn timeout_maps_to_network_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/titles"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(TITLES)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = SafeClient::with_config(ClientConfig {
        base_url: mock_server.uri(),
        connect_timeout: Duration::from_secs(1),
        timeout: Duration::from_millis(200),
    })
    .unwrap();
    let result = client.titles(&TitleQuery::default()).await;

    let err = result.error().unwrap();
    assert_eq!(err.code, ErrorCode::NetworkError);
    assert_eq!(err.message, "Connection timed out");
    assert_eq!(err.reason.as_deref(), Some("Server took too long to respond"));
}

#[tokio::test]
async fn refused_connection_maps_to_network_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = SafeClient::with_base_url(&format!("http://127.0.0.1:{}", port)).unwrap();
    let result = client.home().await;

    let err = result.error().unwrap();
    assert_eq!(err.code, ErrorCode::NetworkError);
    assert!(!err.message.is_empty());
    assert!(err.reason.is_some());
}

#[tokio::test]
async fn unparseable_date_keeps_the_page() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/titles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data": [
                {"id": 1, "title": "Istri Rahasia CEO", "date_created": "2024-11-02T08:15:00Z"},
                {"id": 2, "title": "Pembalasan Sang Pewaris", "date_created": "2024-11-02"}
            ]}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = SafeClient::with_base_url(&mock_server.uri()).unwrap();
    let result = client.titles(&TitleQuery::default()).await;

    let titles = result.data().unwrap().items();
    assert_eq!(titles.len(), 2);
    assert!(titles[0].date_created.is_some());
    assert_eq!(titles[1].id, 2);
    assert!(titles[1].date_created.is_none());
}

#[tokio::test]
async fn unresolvable_host_maps_to_no_internet() {
    let client = SafeClient::with_config(ClientConfig {
        base_url: "http://shortlovers-test.invalid".to_string(),
        connect_timeout: Duration::from_secs(10),
        timeout: Duration::from_secs(10),
    })
    .unwrap();
    let result = client.title_groups(&TitleGroupQuery::default()).await;

    let err = result.error().unwrap();
    assert_eq!(err.code, ErrorCode::NetworkError);
    assert_eq!(err.message, "No internet connection");
    assert_eq!(err.reason.as_deref(), Some("Unable to resolve host"));
}

#[tokio::test]
async fn malformed_success_body_is_unknown() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/titles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": [{"title": 5}]}"#))
        .mount(&mock_server)
        .await;

    let client = SafeClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .titles(&TitleQuery::default())
        .await
        .error()
        .cloned()
        .unwrap();
    assert_eq!(err.code, ErrorCode::Unknown);
}

#[tokio::test]
async fn identical_reads_are_equal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/titles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TITLES))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = SafeClient::with_base_url(&mock_server.uri()).unwrap();
    let query = TitleQuery::default();
    let (a, b) = tokio::join!(client.titles(&query), client.titles(&query));
    assert!(matches!(a, NetworkResult::Success(_)));
    assert_eq!(a, b);
}
