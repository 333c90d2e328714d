//! Integration tests for `ResortApiClient` using wiremock HTTP mocks.

use skidir_core::{ApiConfig, EndpointPaths, SearchFilters};
use skidir_resorts::{ErrorKind, ResortApiClient, ResortsError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        endpoints: EndpointPaths::default(),
        api_key: "test-key".to_string(),
        api_host: "ski-resorts.p.rapidapi.com".to_string(),
        use_fallback: false,
        request_timeout_secs: 5,
        user_agent: "skidir-test/0.1".to_string(),
    }
}

fn test_client(base_url: &str) -> ResortApiClient {
    ResortApiClient::new(&test_config(base_url)).expect("client construction should not fail")
}

#[tokio::test]
async fn get_all_resorts_sends_auth_headers_and_normalizes() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "resorts": [
            {
                "resort_id": "mad-river-glen-vt",
                "name": "Mad River Glen",
                "state": "Vermont",
                "city": "Fayston",
                "summit_elevation": 3637,
                "base_elevation": 1637,
                "total_trails": 45,
                "adult_ticket_price": 99
            },
            {
                "name": "Jay Peak",
                "location": { "state": "Vermont" },
                "elevation": { "summit": 3968 }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .and(header("X-RapidAPI-Key", "test-key"))
        .and(header("X-RapidAPI-Host", "ski-resorts.p.rapidapi.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resorts = client.get_all_resorts().await.expect("should fetch resorts");

    assert_eq!(resorts.len(), 2);
    assert_eq!(resorts[0].id, "mad-river-glen-vt");
    assert_eq!(resorts[0].display_location(), "Fayston, Vermont");
    assert_eq!(resorts[0].elevation.summit, 3637);
    assert_eq!(resorts[0].trails.total, 45);
    assert_eq!(resorts[1].id, "resort-2");
    assert_eq!(resorts[1].elevation.summit, 3968);
}

#[tokio::test]
async fn get_all_resorts_accepts_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "id": "bolton-valley-vt", "name": "Bolton Valley" }])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resorts = client.get_all_resorts().await.expect("should fetch resorts");
    assert_eq!(resorts.len(), 1);
    assert_eq!(resorts[0].name, "Bolton Valley");
}

#[tokio::test]
async fn unexpected_shape_yields_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": 5 })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resorts = client.get_all_resorts().await.expect("shape mismatch is not an error");
    assert!(resorts.is_empty());
}

#[tokio::test]
async fn get_resort_by_id_appends_id_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resort/sugarbush-vt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "sugarbush-vt",
            "name": "Sugarbush Resort",
            "state": "Vermont",
            "total_lifts": 16
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resort = client
        .get_resort_by_id("sugarbush-vt")
        .await
        .expect("should fetch resort");
    assert_eq!(resort.name, "Sugarbush Resort");
    assert_eq!(resort.lifts.total, 16);
}

#[tokio::test]
async fn search_resorts_forwards_term_and_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts/search"))
        .and(query_param("search", "loon"))
        .and(query_param("state", "New Hampshire"))
        .and(query_param("min_elevation", "3000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resorts": [{ "id": "loon-mountain-nh", "name": "Loon Mountain Resort" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = SearchFilters {
        state: Some("New Hampshire".to_string()),
        min_elevation: Some(3000),
        ..SearchFilters::default()
    };
    let client = test_client(&server.uri());
    let resorts = client
        .search_resorts("loon", &filters)
        .await
        .expect("should search");
    assert_eq!(resorts.len(), 1);
    assert_eq!(resorts[0].id, "loon-mountain-nh");
}

#[tokio::test]
async fn non_success_status_is_fetch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_all_resorts().await.unwrap_err();
    assert!(matches!(err, ResortsError::UnexpectedStatus { status: 503, .. }));
    assert_eq!(err.kind(), ErrorKind::FetchFailure);
}

#[tokio::test]
async fn not_subscribed_message_is_subscription_required() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "You are not subscribed to this API."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_all_resorts().await.unwrap_err();
    assert!(err.is_subscription_required());
    assert_eq!(err.kind(), ErrorKind::SubscriptionRequired);
}

#[tokio::test]
async fn forbidden_with_not_subscribed_message_is_subscription_required() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "You are not subscribed to this API."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_all_resorts().await.unwrap_err();
    assert!(matches!(err, ResortsError::SubscriptionRequired(_)));
    assert_eq!(err.kind(), ErrorKind::SubscriptionRequired);
}

#[tokio::test]
async fn forbidden_with_other_message_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Invalid API key."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_all_resorts().await.unwrap_err();
    assert!(matches!(err, ResortsError::UnexpectedStatus { status: 403, .. }));
    assert_eq!(err.kind(), ErrorKind::FetchFailure);
}

#[tokio::test]
async fn connection_refused_is_http_fetch_failure() {
    let client = test_client("http://127.0.0.1:1");
    let err = client.get_all_resorts().await.unwrap_err();
    assert!(matches!(err, ResortsError::Http(_)));
    assert_eq!(err.kind(), ErrorKind::FetchFailure);
}

#[tokio::test]
async fn non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_all_resorts().await.unwrap_err();
    assert!(matches!(err, ResortsError::Deserialize { .. }));
    assert_eq!(err.kind(), ErrorKind::FetchFailure);
}
