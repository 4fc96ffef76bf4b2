//! TfL Unified API client.
//!
//! This module provides an HTTP client for the two StopPoint endpoints we
//! need: name search and live arrivals.
//!
//! Key characteristics of the API:
//! - Arrival predictions are live and change every few seconds, so nothing
//!   here is cached
//! - `app_id`/`app_key` are optional query parameters; anonymous calls work
//!   at a lower rate limit
//! - Arrival payloads vary by mode, so they are normalized into
//!   [`crate::domain::Arrival`] before anything else sees them

mod api;
mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use api::TransitApi;
pub use client::{DEFAULT_BASE_URL, TflClient, TflConfig};
pub use convert::{clean_destination, convert_arrival, convert_arrivals};
pub use error::TflError;
pub use mock::{MockFailure, MockTransitApi};
pub use types::{ArrivalDto, SearchResponse, StopMatch};
