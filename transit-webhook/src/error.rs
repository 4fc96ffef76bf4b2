//! Query outcome errors and the sentences users see for them.
//!
//! Every failure a query can hit is recovered here and turned into one
//! fixed sentence. Raw upstream errors are logged, never shown.

use crate::tfl::TflError;

/// Reply used when no specific reply applies (unknown intent, bad request body).
pub const DEFAULT_REPLY: &str =
    "I'm sorry, I couldn't get the transit information right now. Please try again later.";

const STOP_NOT_FOUND: &str = "I couldn't identify the specific stop or station you're asking about. Could you please provide a well-known stop name, landmark, or a TfL Stop ID?";

const NO_ARRIVALS: &str = "No arrival information available for this stop at the moment.";

const UPSTREAM_STATUS: &str =
    "I'm having trouble connecting to the transit service. Please try again in a moment.";

const UPSTREAM_CONNECT: &str = "I can't reach the transit service. Please check your internet connection or try again later.";

const UPSTREAM_TIMEOUT: &str = "The transit service took too long to respond. Please try again.";

const UNEXPECTED: &str = "Something went wrong while fetching transit info. Please try again.";

/// Why a query produced no arrivals to report.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The stop name could not be resolved to a stop
    #[error("stop not found: {query:?}")]
    StopNotFound { query: String },

    /// The stop exists but has no predictions right now
    #[error("no arrivals at stop {stop}")]
    NoArrivals { stop: String },

    /// Predictions exist, but none for the requested route
    #[error("no arrivals for route {route} at stop {stop}")]
    NoMatchingRoute { stop: String, route: String },

    /// A remote call failed
    #[error("upstream failure: {0}")]
    Upstream(#[from] TflError),
}

impl QueryError {
    /// The sentence to show the end user.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::StopNotFound { .. } => STOP_NOT_FOUND.to_string(),
            QueryError::NoArrivals { .. } => NO_ARRIVALS.to_string(),
            QueryError::NoMatchingRoute { route, .. } => format!(
                "I couldn't find any upcoming arrivals for route '{route}' at this stop. It might not serve this stop, or there are no immediate arrivals."
            ),
            QueryError::Upstream(err) => upstream_message(err).to_string(),
        }
    }

    /// Whether this is an upstream failure rather than an empty result.
    pub fn is_upstream(&self) -> bool {
        matches!(self, QueryError::Upstream(_))
    }
}

fn upstream_message(err: &TflError) -> &'static str {
    match err {
        TflError::Timeout { .. } => UPSTREAM_TIMEOUT,
        TflError::Connect { .. } => UPSTREAM_CONNECT,
        TflError::Status { .. } => UPSTREAM_STATUS,
        TflError::Json { .. } | TflError::Http(_) | TflError::InvalidUrl(_) => UNEXPECTED,
    }
}
