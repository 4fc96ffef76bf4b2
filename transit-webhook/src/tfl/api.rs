//! The transit API seam.

use std::future::Future;

use crate::domain::{Arrival, StopId};

use super::error::TflError;
use super::types::StopMatch;

/// The two remote operations the query pipeline needs.
///
/// Implemented by [`super::TflClient`] for real traffic and by
/// [`super::MockTransitApi`] for tests and local development.
pub trait TransitApi: Send + Sync + 'static {
    /// Search stops by free-text name. Matches are returned best first.
    fn search_stops(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<StopMatch>, TflError>> + Send;

    /// Fetch live arrival predictions for a stop, in upstream order.
    fn arrivals(
        &self,
        stop: &StopId,
    ) -> impl Future<Output = Result<Vec<Arrival>, TflError>> + Send;
}
