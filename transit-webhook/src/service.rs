//! End-to-end arrival queries.
//!
//! Wires the stop resolver and the arrival formatter together and turns
//! every outcome into something a user can read.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::arrivals::ArrivalFormatter;
use crate::domain::{Arrival, RouteFilter, StopId};
use crate::error::QueryError;
use crate::gazetteer::Gazetteer;
use crate::resolve::StopResolver;
use crate::tfl::TransitApi;

/// The ranked arrivals for a resolved stop.
#[derive(Debug, Clone)]
pub struct StopArrivals {
    pub stop: StopId,
    pub arrivals: Vec<Arrival>,
}

/// Answers "when's the next ... at ...?" queries.
pub struct ArrivalsService<A> {
    resolver: StopResolver<A>,
    formatter: ArrivalFormatter<A>,
}

impl<A> Clone for ArrivalsService<A> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            formatter: self.formatter.clone(),
        }
    }
}

impl<A: TransitApi> ArrivalsService<A> {
    /// Create a service sharing one API client between both steps.
    pub fn new(gazetteer: Arc<Gazetteer>, api: Arc<A>) -> Self {
        Self {
            resolver: StopResolver::new(gazetteer, Arc::clone(&api)),
            formatter: ArrivalFormatter::new(api),
        }
    }

    /// Resolve the stop and return its ranked arrivals.
    ///
    /// The two remote calls run one after the other; the second needs the
    /// first's answer.
    pub async fn lookup(
        &self,
        stop_name: &str,
        route: Option<&RouteFilter>,
    ) -> Result<StopArrivals, QueryError> {
        let stop = self.resolver.resolve(stop_name).await?;
        let arrivals = self.formatter.ranked(&stop, route).await?;
        Ok(StopArrivals { stop, arrivals })
    }

    /// Answer a query with reply text. Never fails.
    ///
    /// A missing stop name is treated as an unresolvable stop.
    pub async fn answer(&self, stop_name: Option<&str>, route: Option<&str>) -> String {
        let route = route.and_then(RouteFilter::new);

        let result = match stop_name {
            Some(name) => self.reply(name, route.as_ref()).await,
            None => Err(QueryError::StopNotFound {
                query: String::new(),
            }),
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                if e.is_upstream() {
                    error!(error = %e, "arrival query failed");
                } else {
                    warn!(error = %e, "arrival query had no answer");
                }
                e.user_message()
            }
        }
    }

    async fn reply(&self, stop_name: &str, route: Option<&RouteFilter>) -> Result<String, QueryError> {
        let (stop, resolved_by) = self.resolver.resolve_with_source(stop_name).await?;
        info!(
            stop_name,
            %stop,
            ?resolved_by,
            route = route.map(RouteFilter::as_str),
            "resolved stop"
        );
        self.formatter.format(&stop, route).await
    }
}
