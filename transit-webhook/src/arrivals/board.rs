//! Fetch, rank and render arrivals for one stop.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Arrival, RouteFilter, StopId};
use crate::error::QueryError;
use crate::tfl::TransitApi;

use super::format::render_arrivals;
use super::rank::{EmptyBoard, MAX_ARRIVALS, rank_arrivals};

/// Produces the reply text for a resolved stop.
pub struct ArrivalFormatter<A> {
    api: Arc<A>,
}

impl<A> Clone for ArrivalFormatter<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: TransitApi> ArrivalFormatter<A> {
    /// Create a formatter over the given API.
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch arrivals for the stop and return the soonest few on the route.
    ///
    /// Makes exactly one network call.
    pub async fn ranked(
        &self,
        stop: &StopId,
        route: Option<&RouteFilter>,
    ) -> Result<Vec<Arrival>, QueryError> {
        let arrivals = self.api.arrivals(stop).await.map_err(|e| {
            warn!(%stop, error = %e, "arrivals fetch failed");
            QueryError::Upstream(e)
        })?;

        let total = arrivals.len();
        let ranked = rank_arrivals(arrivals, route, MAX_ARRIVALS).map_err(|reason| match reason {
            EmptyBoard::NoArrivals => QueryError::NoArrivals {
                stop: stop.to_string(),
            },
            EmptyBoard::NoMatchingRoute => QueryError::NoMatchingRoute {
                stop: stop.to_string(),
                route: route.map(|r| r.as_str().to_string()).unwrap_or_default(),
            },
        })?;

        debug!(
            %stop,
            route = route.map(RouteFilter::as_str),
            total,
            shown = ranked.len(),
            "ranked arrivals"
        );

        Ok(ranked)
    }

    /// Fetch arrivals for the stop and describe them in sentences.
    pub async fn format(
        &self,
        stop: &StopId,
        route: Option<&RouteFilter>,
    ) -> Result<String, QueryError> {
        let ranked = self.ranked(stop, route).await?;
        Ok(render_arrivals(&ranked))
    }
}
