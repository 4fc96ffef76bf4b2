//! TfL HTTP client.
//!
//! Provides async methods for the StopPoint search and arrivals endpoints.
//! Handles credentials, timeouts, error classification, and conversion to
//! domain types.

use std::time::Duration;

use chrono::Utc;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Arrival, StopId};

use super::api::TransitApi;
use super::convert::convert_arrivals;
use super::error::TflError;
use super::types::{ArrivalDto, SearchResponse, StopMatch};

/// Default base URL for the TfL Unified API.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How much of an unparseable body to keep for the error message.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application id, sent as the `app_id` query parameter
    pub app_id: String,
    /// Application key, sent as the `app_key` query parameter
    pub app_key: String,
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl TflConfig {
    /// Create a new config with the given credentials.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// TfL Unified API client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Vec<(&'static str, String)>,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TflError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(TflError::InvalidUrl(config.base_url));
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        // Blank credentials are left off; TfL serves anonymous requests
        let credentials = [("app_id", config.app_id), ("app_key", config.app_key)]
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Search stops by name.
    ///
    /// The name is sent as a single percent-encoded path segment, so
    /// slashes and spaces in user input are harmless.
    pub async fn search_stops(&self, name: &str) -> Result<Vec<StopMatch>, TflError> {
        let url = self.endpoint(&["StopPoint", "Search", name])?;
        let response: SearchResponse = self.get_json(url).await?;

        debug!(
            query = name,
            matches = response.matches.len(),
            "stop search complete"
        );

        Ok(response.matches)
    }

    /// Get live arrivals at a stop, normalized to domain types.
    pub async fn arrivals(&self, stop: &StopId) -> Result<Vec<Arrival>, TflError> {
        let url = self.endpoint(&["StopPoint", stop.as_str(), "Arrivals"])?;
        let dtos: Vec<ArrivalDto> = self.get_json(url).await?;

        debug!(stop = %stop, predictions = dtos.len(), "arrivals fetched");

        Ok(convert_arrivals(&dtos, Utc::now()))
    }

    /// Build an endpoint URL below the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TflError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TflError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TflError> {
        let response = self
            .http
            .get(url)
            .query(&self.credentials)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Status {
                status: status.as_u16(),
                message: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}

impl TransitApi for TflClient {
    async fn search_stops(&self, name: &str) -> Result<Vec<StopMatch>, TflError> {
        TflClient::search_stops(self, name).await
    }

    async fn arrivals(&self, stop: &StopId) -> Result<Vec<Arrival>, TflError> {
        TflClient::arrivals(self, stop).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::net::SocketAddr;

    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};

    #[test]
    fn config_builder() {
        let config = TflConfig::new("id", "key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.app_id, "id");
        assert_eq!(config.app_key, "key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn config_defaults() {
        let config = TflConfig::new("id", "key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn client_creation() {
        assert!(TflClient::new(TflConfig::new("id", "key")).is_ok());
    }

    #[test]
    fn rejects_bad_base_url() {
        let result = TflClient::new(TflConfig::new("", "").with_base_url("not a url"));
        assert!(matches!(result, Err(TflError::InvalidUrl(_))));

        let result = TflClient::new(TflConfig::new("", "").with_base_url("mailto:ops@tfl.gov.uk"));
        assert!(matches!(result, Err(TflError::InvalidUrl(_))));
    }

    #[test]
    fn endpoint_encodes_segments() {
        let client = TflClient::new(
            TflConfig::new("", "").with_base_url("https://api.example.com/tfl/"),
        )
        .unwrap();

        let url = client
            .endpoint(&["StopPoint", "Search", "king's cross / st pancras"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.example.com/tfl/StopPoint/Search/king's%20cross%20%2F%20st%20pancras"
        );
    }

    #[test]
    fn blank_credentials_omitted() {
        let client = TflClient::new(TflConfig::new("my-id", " ")).unwrap();
        assert_eq!(client.credentials, vec![("app_id", "my-id".to_string())]);
    }

    /// Start a stand-in TfL server on an ephemeral port.
    async fn stub_server() -> SocketAddr {
        async fn search(
            Path(name): Path<String>,
            Query(params): Query<HashMap<String, String>>,
        ) -> impl IntoResponse {
            if params.get("app_key").map(String::as_str) != Some("secret") {
                return (StatusCode::FORBIDDEN, "bad key").into_response();
            }
            let matches = if name == "canary wharf" {
                serde_json::json!([
                    { "id": "HUBZCW", "name": "Canary Wharf", "modes": ["bus", "dlr"] },
                    { "id": "940GZZDLCAN", "name": "Canary Wharf DLR Station" }
                ])
            } else {
                serde_json::json!([])
            };
            Json(serde_json::json!({ "query": name, "total": 2, "matches": matches }))
                .into_response()
        }

        async fn arrivals(Path(id): Path<String>) -> impl IntoResponse {
            match id.as_str() {
                "490008660N" => Json(serde_json::json!([
                    { "lineId": "d8", "lineName": "D8", "towards": "Crossharbour",
                      "timeToStation": 300, "modeName": "bus" },
                    { "lineId": "135", "lineName": "135", "destinationName": "Old Street",
                      "timeToStation": 45, "modeName": "bus" }
                ]))
                .into_response(),
                "SLOW" => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Json(serde_json::json!([])).into_response()
                }
                "BROKEN" => "<html>oops</html>".into_response(),
                _ => (StatusCode::NOT_FOUND, "stop not found").into_response(),
            }
        }

        let app = Router::new()
            .route("/StopPoint/Search/:name", get(search))
            .route("/StopPoint/:id/Arrivals", get(arrivals));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> TflClient {
        let config = TflConfig::new("my-id", "secret")
            .with_base_url(format!("http://{addr}"))
            .with_timeout(Duration::from_millis(500));
        TflClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn search_returns_matches_in_order() {
        let client = client_for(stub_server().await);

        let matches = client.search_stops("canary wharf").await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "HUBZCW");
        assert_eq!(matches[1].id, "940GZZDLCAN");
    }

    #[tokio::test]
    async fn search_with_no_matches() {
        let client = client_for(stub_server().await);
        assert!(client.search_stops("nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_key_is_status_error() {
        let addr = stub_server().await;
        let client = TflClient::new(
            TflConfig::new("my-id", "wrong").with_base_url(format!("http://{addr}")),
        )
        .unwrap();

        let err = client.search_stops("canary wharf").await.unwrap_err();
        assert!(matches!(err, TflError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn arrivals_are_normalized() {
        let client = client_for(stub_server().await);
        let stop = StopId::parse("490008660N").unwrap();

        let arrivals = client.arrivals(&stop).await.unwrap();

        assert_eq!(arrivals.len(), 2);
        assert_eq!(arrivals[0].line_name, "D8");
        assert_eq!(arrivals[0].destination.as_deref(), Some("Crossharbour"));
        assert_eq!(arrivals[1].seconds_to_arrival, Some(45));
    }

    #[tokio::test]
    async fn not_found_is_status_error() {
        let client = client_for(stub_server().await);
        let stop = StopId::parse("UNKNOWN").unwrap();

        let err = client.arrivals(&stop).await.unwrap_err();
        match err {
            TflError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "stop not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_response_is_timeout() {
        let client = client_for(stub_server().await);
        let stop = StopId::parse("SLOW").unwrap();

        let err = client.arrivals(&stop).await.unwrap_err();
        assert!(matches!(err, TflError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn html_body_is_json_error() {
        let client = client_for(stub_server().await);
        let stop = StopId::parse("BROKEN").unwrap();

        let err = client.arrivals(&stop).await.unwrap_err();
        match err {
            TflError::Json { body, .. } => assert_eq!(body.as_deref(), Some("<html>oops</html>")),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_connect_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(addr);
        let err = client.search_stops("anything").await.unwrap_err();
        assert!(matches!(err, TflError::Connect { .. }), "got {err:?}");
    }
}
