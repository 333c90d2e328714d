//! Integration tests for `ResortProvider` against a wiremock API.

use skidir_core::{ApiConfig, EndpointPaths, SearchFilters};
use skidir_resorts::{fallback_resorts, ProviderStatus, ResortProvider, FALLBACK_ERROR_MESSAGE};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn live_config(base_url: &str) -> ApiConfig {
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

fn remote_body() -> serde_json::Value {
    serde_json::json!({
        "resorts": [
            { "id": "sugarbush-vt", "name": "Sugarbush Resort", "state": "Vermont", "summit_elevation": 4083 },
            { "id": "whiteface-ny", "name": "Whiteface", "state": "New York", "summit_elevation": 4650 }
        ]
    })
}

#[tokio::test]
async fn successful_fetch_installs_remote_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_body()))
        .mount(&server)
        .await;

    let provider = ResortProvider::new(&live_config(&server.uri())).expect("provider");
    assert_eq!(provider.load().await, ProviderStatus::Ready);

    let snapshot = provider.snapshot();
    assert_eq!(snapshot.resorts.len(), 2);
    assert!(snapshot.error.is_none());
    assert!(snapshot.loaded_at.is_some());
    assert_eq!(
        provider.find("whiteface-ny").map(|r| r.elevation.summit),
        Some(4650)
    );
}

#[tokio::test]
async fn server_error_degrades_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = ResortProvider::new(&live_config(&server.uri())).expect("provider");
    assert_eq!(provider.load().await, ProviderStatus::Degraded);
    assert_eq!(&provider.resorts()[..], &fallback_resorts()[..]);
    assert_eq!(provider.error().as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[tokio::test]
async fn subscription_required_degrades_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "You are not subscribed to this API."
        })))
        .mount(&server)
        .await;

    let provider = ResortProvider::new(&live_config(&server.uri())).expect("provider");
    assert_eq!(provider.load().await, ProviderStatus::Degraded);
    assert_eq!(provider.resorts().len(), fallback_resorts().len());
    assert_eq!(provider.error().as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[tokio::test]
async fn unreachable_api_degrades_to_fallback() {
    let provider = ResortProvider::new(&live_config("http://127.0.0.1:1")).expect("provider");
    assert_eq!(provider.load().await, ProviderStatus::Degraded);
    assert_eq!(&provider.resorts()[..], &fallback_resorts()[..]);
    assert_eq!(provider.error().as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[tokio::test]
async fn forbidden_subscription_response_degrades_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "You are not subscribed to this API."
        })))
        .mount(&server)
        .await;

    let provider = ResortProvider::new(&live_config(&server.uri())).expect("provider");
    assert_eq!(provider.load().await, ProviderStatus::Degraded);
    assert_eq!(&provider.resorts()[..], &fallback_resorts()[..]);
    assert_eq!(provider.error().as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[tokio::test]
async fn degraded_provider_still_searches_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let provider = ResortProvider::new(&live_config(&server.uri())).expect("provider");
    provider.load().await;

    let filters = SearchFilters {
        min_elevation: Some(4000),
        ..SearchFilters::default()
    };
    let ids: Vec<String> = provider
        .search("", &filters)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["killington-vt", "stowe-vt", "cannon-mountain-nh"]);
}

#[tokio::test]
async fn use_fallback_never_touches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = live_config(&server.uri());
    config.use_fallback = true;
    let provider = ResortProvider::new(&config).expect("provider");

    assert_eq!(provider.load().await, ProviderStatus::Ready);
    assert_eq!(provider.refetch().await, ProviderStatus::Ready);
    assert!(provider.error().is_none());
    assert_eq!(provider.resorts().len(), fallback_resorts().len());
}

#[tokio::test]
async fn refetch_recovers_after_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/resorts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_body()))
        .mount(&server)
        .await;

    let provider = ResortProvider::new(&live_config(&server.uri())).expect("provider");
    assert_eq!(provider.load().await, ProviderStatus::Degraded);
    assert_eq!(provider.refetch().await, ProviderStatus::Ready);
    assert!(provider.error().is_none());
    assert_eq!(provider.resorts()[0].id, "sugarbush-vt");
}
