//! Application state for the web layer.

use std::sync::Arc;

use crate::gazetteer::Gazetteer;
use crate::service::ArrivalsService;
use crate::tfl::TransitApi;

/// Shared application state.
///
/// Everything in here is read-only after startup.
pub struct AppState<A> {
    /// Arrival query pipeline
    pub service: Arc<ArrivalsService<A>>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<A: TransitApi> AppState<A> {
    /// Create a new app state.
    pub fn new(gazetteer: Gazetteer, api: A) -> Self {
        Self {
            service: Arc::new(ArrivalsService::new(Arc::new(gazetteer), Arc::new(api))),
        }
    }
}
