//! HTTP client for the remote ski resort API.
//!
//! Wraps `reqwest` with the API's header-based authentication, response
//! classification, and normalization of whatever JSON shape comes back.

use std::time::Duration;

use reqwest::{Client, Url};
use skidir_core::{ApiConfig, EndpointPaths, ResortRecord, SearchFilters};

use crate::error::ResortsError;
use crate::normalize::{normalize_payload, normalize_resort};

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Substring of the `message` field the API returns when the key has no
/// subscription. Compared case-insensitively.
const SUBSCRIPTION_MARKER: &str = "not subscribed";

/// Client for the remote resort API.
///
/// Every request carries the configured key and host headers. Use
/// [`ResortApiClient::new`] with the application's [`ApiConfig`]; tests point
/// `base_url` at a mock server.
pub struct ResortApiClient {
    client: Client,
    base_url: String,
    endpoints: EndpointPaths,
    api_key: String,
    api_host: String,
}

impl ResortApiClient {
    /// Creates a client from the API section of the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ResortsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ResortsError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(config: &ApiConfig) -> Result<Self, ResortsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ResortsError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            endpoints: config.endpoints.clone(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    /// Fetches every resort the API knows about.
    ///
    /// # Errors
    ///
    /// - [`ResortsError::SubscriptionRequired`] if the key lacks access.
    /// - [`ResortsError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ResortsError::Http`] on network failure.
    /// - [`ResortsError::Deserialize`] if the body is not JSON.
    pub async fn get_all_resorts(&self) -> Result<Vec<ResortRecord>, ResortsError> {
        let url = self.endpoint_url(&self.endpoints.all_resorts)?;
        let body = self.request_json(&url).await?;
        Ok(normalize_payload(&body))
    }

    /// Fetches a single resort by id.
    ///
    /// # Errors
    ///
    /// Same as [`ResortApiClient::get_all_resorts`].
    pub async fn get_resort_by_id(&self, resort_id: &str) -> Result<ResortRecord, ResortsError> {
        let mut url = self.endpoint_url(&self.endpoints.single_resort)?;
        url.path_segments_mut()
            .map_err(|()| ResortsError::InvalidBaseUrl {
                base_url: self.base_url.clone(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .push(resort_id);

        let body = self.request_json(&url).await?;
        Ok(normalize_resort(&body))
    }

    /// Asks the API to search server-side.
    ///
    /// Only the search term, state, and minimum elevation are forwarded; the
    /// API has no parameters for the other filters.
    ///
    /// # Errors
    ///
    /// Same as [`ResortApiClient::get_all_resorts`].
    pub async fn search_resorts(
        &self,
        search_term: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<ResortRecord>, ResortsError> {
        let url = self.search_url(search_term, filters)?;
        let body = self.request_json(&url).await?;
        Ok(normalize_payload(&body))
    }

    fn search_url(&self, search_term: &str, filters: &SearchFilters) -> Result<Url, ResortsError> {
        let mut url = self.endpoint_url(&self.endpoints.search_resorts)?;
        {
            let mut pairs = url.query_pairs_mut();
            if !search_term.is_empty() {
                pairs.append_pair("search", search_term);
            }
            if let Some(state) = filters.state.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("state", state);
            }
            if let Some(min) = filters.min_elevation {
                pairs.append_pair("min_elevation", &min.to_string());
            }
        }
        // An empty query_pairs_mut() still leaves a bare '?'.
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    /// Joins the base URL and an endpoint path.
    fn endpoint_url(&self, path: &str) -> Result<Url, ResortsError> {
        let joined = if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        };
        Url::parse(&joined).map_err(|e| ResortsError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: format!("endpoint \"{path}\": {e}"),
        })
    }

    /// Sends an authenticated GET, parses the body as JSON and rejects
    /// subscription-required responses, whatever their status. Any other
    /// non-2xx status is `UnexpectedStatus`.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, ResortsError> {
        tracing::debug!(%url, "requesting resort data");
        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The API reports a missing subscription as a 403 with a JSON message.
            let text = response.text().await.unwrap_or_default();
            if let Ok(body) = serde_json::from_str::<serde_json::Value>(&text) {
                check_subscription(&body)?;
            }
            return Err(ResortsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ResortsError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        check_subscription(&body)?;
        Ok(body)
    }
}

/// Fails when the body is an object whose `message` says the caller is not
/// subscribed.
fn check_subscription(body: &serde_json::Value) -> Result<(), ResortsError> {
    if let Some(message) = body.get("message").and_then(serde_json::Value::as_str) {
        if message.to_lowercase().contains(SUBSCRIPTION_MARKER) {
            return Err(ResortsError::SubscriptionRequired(message.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
