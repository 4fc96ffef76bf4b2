//! Stop name resolution.
//!
//! Turns whatever the user said into a stop identifier, trying in order:
//! 1. A literal 5- or 9-digit stop code (trusted as-is)
//! 2. The static gazetteer of well-known names
//! 3. The remote stop search, taking the first valid match

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::StopId;
use crate::error::QueryError;
use crate::gazetteer::Gazetteer;
use crate::tfl::TransitApi;

/// How a stop was resolved, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    Literal,
    Gazetteer,
    Search,
}

/// Resolves stop names to identifiers.
pub struct StopResolver<A> {
    gazetteer: Arc<Gazetteer>,
    api: Arc<A>,
}

impl<A> Clone for StopResolver<A> {
    fn clone(&self) -> Self {
        Self {
            gazetteer: Arc::clone(&self.gazetteer),
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: TransitApi> StopResolver<A> {
    /// Create a resolver over the given gazetteer and API.
    pub fn new(gazetteer: Arc<Gazetteer>, api: Arc<A>) -> Self {
        Self { gazetteer, api }
    }

    /// Resolve a stop name.
    ///
    /// Makes at most one network call, and only when neither the literal
    /// rule nor the gazetteer applies. Returns `StopNotFound` when nothing
    /// matches and `Upstream` when the search call itself fails.
    pub async fn resolve(&self, input: &str) -> Result<StopId, QueryError> {
        self.resolve_with_source(input).await.map(|(stop, _)| stop)
    }

    /// Resolve a stop name, also reporting which path found it.
    pub async fn resolve_with_source(
        &self,
        input: &str,
    ) -> Result<(StopId, ResolvedBy), QueryError> {
        let query = input.trim();
        let not_found = || QueryError::StopNotFound {
            query: query.to_string(),
        };

        if query.is_empty() {
            return Err(not_found());
        }

        if let Some(stop) = StopId::literal(query) {
            debug!(%stop, "using literal stop code");
            return Ok((stop, ResolvedBy::Literal));
        }

        if let Some(stop) = self.gazetteer.get(query) {
            debug!(query, %stop, "resolved from gazetteer");
            return Ok((stop.clone(), ResolvedBy::Gazetteer));
        }

        let matches = self.api.search_stops(query).await.map_err(|e| {
            warn!(query, error = %e, "stop search failed");
            QueryError::Upstream(e)
        })?;

        // Trust upstream ranking; skip only ids we couldn't put in a URL
        let stop = matches
            .iter()
            .find_map(|m| StopId::parse(&m.id).ok())
            .ok_or_else(|| {
                debug!(query, candidates = matches.len(), "no usable search match");
                not_found()
            })?;

        debug!(query, %stop, "resolved by search");
        Ok((stop, ResolvedBy::Search))
    }
}
