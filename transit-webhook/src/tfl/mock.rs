//! In-memory transit API for testing without network access.
//!
//! Serves canned stop matches and arrivals, can be told to fail in the ways
//! the real API fails, and counts how often each endpoint was called.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Arrival, StopId};

use super::api::TransitApi;
use super::error::TflError;
use super::types::StopMatch;

/// A failure the mock should report instead of answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Timeout,
    Connect,
    Status(u16),
    MalformedBody,
}

impl MockFailure {
    fn to_error(self, path: &str) -> TflError {
        match self {
            MockFailure::Timeout => TflError::Timeout {
                url: path.to_string(),
            },
            MockFailure::Connect => TflError::Connect {
                message: "connection refused".to_string(),
            },
            MockFailure::Status(status) => TflError::Status {
                status,
                message: "mock failure".to_string(),
            },
            MockFailure::MalformedBody => TflError::Json {
                message: "expected value at line 1 column 1".to_string(),
                body: Some("<html></html>".to_string()),
            },
        }
    }
}

/// Mock transit API.
///
/// Unknown search names return no matches; unknown stops return no arrivals.
#[derive(Debug, Clone, Default)]
pub struct MockTransitApi {
    /// Search results keyed by the exact query string.
    searches: HashMap<String, Vec<StopMatch>>,
    /// Arrivals keyed by stop.
    boards: HashMap<StopId, Vec<Arrival>>,
    search_failure: Option<MockFailure>,
    arrivals_failure: Option<MockFailure>,
    search_calls: Arc<AtomicUsize>,
    arrivals_calls: Arc<AtomicUsize>,
}

impl MockTransitApi {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer a search for `name` with stop ids, best first.
    pub fn with_search(mut self, name: &str, ids: &[&str]) -> Self {
        let matches = ids.iter().map(|id| StopMatch::new(*id)).collect();
        self.searches.insert(name.to_string(), matches);
        self
    }

    /// Serve these arrivals for the stop.
    pub fn with_arrivals(mut self, stop: &StopId, arrivals: Vec<Arrival>) -> Self {
        self.boards.insert(stop.clone(), arrivals);
        self
    }

    /// Make every search fail.
    pub fn failing_search(mut self, failure: MockFailure) -> Self {
        self.search_failure = Some(failure);
        self
    }

    /// Make every arrivals fetch fail.
    pub fn failing_arrivals(mut self, failure: MockFailure) -> Self {
        self.arrivals_failure = Some(failure);
        self
    }

    /// Number of search calls so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of arrivals calls so far.
    pub fn arrivals_calls(&self) -> usize {
        self.arrivals_calls.load(Ordering::SeqCst)
    }
}

impl TransitApi for MockTransitApi {
    async fn search_stops(&self, name: &str) -> Result<Vec<StopMatch>, TflError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.search_failure {
            return Err(failure.to_error(&format!("/StopPoint/Search/{name}")));
        }

        Ok(self.searches.get(name).cloned().unwrap_or_default())
    }

    async fn arrivals(&self, stop: &StopId) -> Result<Vec<Arrival>, TflError> {
        self.arrivals_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.arrivals_failure {
            return Err(failure.to_error(&format!("/StopPoint/{stop}/Arrivals")));
        }

        Ok(self.boards.get(stop).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_canned_search() {
        let mock = MockTransitApi::new().with_search("bank", &["940GZZLUBNK", "HUBBAN"]);

        let matches = mock.search_stops("bank").await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "940GZZLUBNK");
        assert_eq!(mock.search_calls(), 1);

        assert!(mock.search_stops("nowhere").await.unwrap().is_empty());
        assert_eq!(mock.search_calls(), 2);
    }

    #[tokio::test]
    async fn serves_canned_arrivals() {
        let stop = StopId::parse("490008660N").unwrap();
        let mock =
            MockTransitApi::new().with_arrivals(&stop, vec![Arrival::new("D8", "d8").with_seconds(60)]);

        let arrivals = mock.arrivals(&stop).await.unwrap();
        assert_eq!(arrivals.len(), 1);
        assert_eq!(mock.arrivals_calls(), 1);

        let other = StopId::parse("9400ZZLUVIC").unwrap();
        assert!(mock.arrivals(&other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn injected_failures() {
        let stop = StopId::parse("490008660N").unwrap();
        let mock = MockTransitApi::new()
            .failing_search(MockFailure::Timeout)
            .failing_arrivals(MockFailure::Status(503));

        let err = mock.search_stops("bank").await.unwrap_err();
        assert!(matches!(err, TflError::Timeout { .. }));

        let err = mock.arrivals(&stop).await.unwrap_err();
        assert!(matches!(err, TflError::Status { status: 503, .. }));
    }

    #[test]
    fn clones_share_counters() {
        let mock = MockTransitApi::new();
        let clone = mock.clone();
        clone.search_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(mock.search_calls(), 1);
    }
}
