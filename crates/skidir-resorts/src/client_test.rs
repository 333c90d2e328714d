use skidir_core::ApiConfig;

use super::*;

fn test_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        endpoints: EndpointPaths::default(),
        api_key: "test-key".to_string(),
        api_host: "ski.example.com".to_string(),
        use_fallback: false,
        request_timeout_secs: 5,
        user_agent: "skidir-test/0.1".to_string(),
    }
}

fn test_client(base_url: &str) -> ResortApiClient {
    ResortApiClient::new(&test_config(base_url)).expect("client construction should not fail")
}

#[test]
fn endpoint_url_joins_base_and_path() {
    let client = test_client("https://api.skiapi.com/v1");
    let url = client.endpoint_url("/resorts").unwrap();
    assert_eq!(url.as_str(), "https://api.skiapi.com/v1/resorts");
}

#[test]
fn endpoint_url_strips_trailing_slash_and_adds_missing_one() {
    let client = test_client("https://api.skiapi.com/v1/");
    let url = client.endpoint_url("resorts").unwrap();
    assert_eq!(url.as_str(), "https://api.skiapi.com/v1/resorts");
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = ResortApiClient::new(&test_config("not a url"));
    assert!(matches!(result, Err(ResortsError::InvalidBaseUrl { .. })));
}

#[test]
fn search_url_forwards_supported_filters() {
    let client = test_client("https://api.skiapi.com/v1");
    let filters = SearchFilters {
        state: Some("New Hampshire".to_string()),
        min_elevation: Some(3000),
        min_lifts: Some(10),
        ..SearchFilters::default()
    };
    let url = client.search_url("loon", &filters).unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.skiapi.com/v1/resorts/search?search=loon&state=New+Hampshire&min_elevation=3000"
    );
}

#[test]
fn search_url_without_criteria_has_no_query() {
    let client = test_client("https://api.skiapi.com/v1");
    let url = client.search_url("", &SearchFilters::default()).unwrap();
    assert_eq!(url.as_str(), "https://api.skiapi.com/v1/resorts/search");
}

#[test]
fn subscription_marker_is_case_insensitive() {
    let body = serde_json::json!({ "message": "You are NOT SUBSCRIBED to this API." });
    let err = check_subscription(&body).unwrap_err();
    assert!(err.is_subscription_required());
}

#[test]
fn other_messages_pass_through() {
    assert!(check_subscription(&serde_json::json!({ "message": "ok" })).is_ok());
    assert!(check_subscription(&serde_json::json!({ "message": 5 })).is_ok());
    assert!(check_subscription(&serde_json::json!([{ "message": "not subscribed" }])).is_ok());
}
