//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::arrivals::render_arrival;
use crate::domain::{Arrival, TransportMode};
use crate::service::StopArrivals;

/// Intent tag for arrival queries.
pub const GET_TRANSIT_SCHEDULE: &str = "GetTransitSchedule";

/// Webhook request from the conversational agent.
///
/// Only the fields we read are modelled; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Which handler to run
    #[serde(default)]
    pub fulfillment_info: FulfillmentInfo,

    /// Session state, including extracted parameters
    #[serde(default)]
    pub session_info: SessionInfo,
}

/// Identifies the webhook handler.
#[derive(Debug, Default, Deserialize)]
pub struct FulfillmentInfo {
    /// Intent tag, e.g. "GetTransitSchedule"
    #[serde(default)]
    pub tag: String,
}

/// Session information.
#[derive(Debug, Default, Deserialize)]
pub struct SessionInfo {
    /// Parameters extracted from the conversation
    #[serde(default)]
    pub parameters: SessionParameters,
}

/// The parameters we care about.
#[derive(Debug, Default, Deserialize)]
pub struct SessionParameters {
    /// Stop or station name, or a stop code
    pub stop_name: Option<ParameterValue>,

    /// Route to filter by
    pub bus_route: Option<ParameterValue>,
}

/// A parameter value.
///
/// Depending on agent configuration, parameters arrive as plain values or as
/// objects carrying a `resolvedValue`. Route numbers may arrive as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Text(String),
    Number(serde_json::Number),
    Resolved {
        #[serde(rename = "resolvedValue")]
        resolved_value: Box<ParameterValue>,
    },
    Other(serde_json::Value),
}

impl ParameterValue {
    /// The value as text, if it has a sensible text form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            ParameterValue::Text(s) => Some(s.clone()),
            ParameterValue::Number(n) => Some(n.to_string()),
            ParameterValue::Resolved { resolved_value } => resolved_value.as_text(),
            ParameterValue::Other(_) => None,
        }
    }
}

impl SessionParameters {
    /// The stop name as text.
    pub fn stop_name(&self) -> Option<String> {
        self.stop_name.as_ref().and_then(ParameterValue::as_text)
    }

    /// The route as text.
    pub fn bus_route(&self) -> Option<String> {
        self.bus_route.as_ref().and_then(ParameterValue::as_text)
    }
}

/// Webhook response in the shape the agent expects:
/// `{ fulfillmentResponse: { messages: [ { text: { text: [ ... ] } } ] } }`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_response: FulfillmentResponse,
}

/// The messages to say.
#[derive(Debug, Serialize, Deserialize)]
pub struct FulfillmentResponse {
    pub messages: Vec<ResponseMessage>,
}

/// One message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub text: TextMessage,
}

/// Text content of a message.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextMessage {
    pub text: Vec<String>,
}

impl WebhookResponse {
    /// A response with a single text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            fulfillment_response: FulfillmentResponse {
                messages: vec![ResponseMessage {
                    text: TextMessage {
                        text: vec![text.into()],
                    },
                }],
            },
        }
    }

    /// The first line of text in the response.
    pub fn first_text(&self) -> Option<&str> {
        self.fulfillment_response
            .messages
            .first()
            .and_then(|m| m.text.text.first())
            .map(String::as_str)
    }
}

/// Query for the arrivals endpoint.
#[derive(Debug, Deserialize)]
pub struct ArrivalsQuery {
    /// Stop name or code
    pub stop: Option<String>,

    /// Optional route filter
    pub route: Option<String>,
}

/// An arrival in API results.
#[derive(Debug, Serialize)]
pub struct ArrivalResult {
    /// Line display name
    pub line: String,

    /// Line identifier
    pub line_id: String,

    /// Destination
    pub destination: Option<String>,

    /// Seconds until arrival
    pub seconds_to_arrival: Option<i64>,

    /// Transport mode, if upstream reported one
    pub mode: Option<TransportMode>,

    /// Platform or stop letter
    pub platform: Option<String>,

    /// The sentence the webhook would say for this arrival
    pub summary: String,
}

/// Response for the arrivals endpoint.
#[derive(Debug, Serialize)]
pub struct ArrivalsResponse {
    /// Resolved stop identifier
    pub stop_id: String,

    /// Arrivals, soonest first
    pub arrivals: Vec<ArrivalResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl ArrivalResult {
    /// Create from a domain Arrival.
    pub fn from_arrival(arrival: &Arrival) -> Self {
        Self {
            line: arrival.line_name.clone(),
            line_id: arrival.line_id.clone(),
            destination: arrival.destination.clone(),
            seconds_to_arrival: arrival.seconds_to_arrival,
            mode: arrival.mode.clone(),
            platform: arrival.platform.clone(),
            summary: render_arrival(arrival),
        }
    }
}

impl ArrivalsResponse {
    /// Create from a query result.
    pub fn from_stop_arrivals(result: &StopArrivals) -> Self {
        Self {
            stop_id: result.stop.to_string(),
            arrivals: result
                .arrivals
                .iter()
                .map(ArrivalResult::from_arrival)
                .collect(),
        }
    }
}
