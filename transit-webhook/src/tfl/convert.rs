//! Conversion from TfL DTOs to domain types.
//!
//! Arrival records come in several shapes: buses usually carry `towards`
//! but no `destinationName`, some feeds give `timeToStation` and others only
//! `expectedArrival`. This module folds all of them into one
//! [`Arrival`] so nothing downstream has to care.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::{Arrival, TransportMode};

use super::types::ArrivalDto;

/// Line name used when upstream gives neither a name nor an id.
const UNKNOWN_LINE: &str = "service";

/// Convert all arrival records, measuring timestamps against `now`.
pub fn convert_arrivals(dtos: &[ArrivalDto], now: DateTime<Utc>) -> Vec<Arrival> {
    dtos.iter().map(|dto| convert_arrival(dto, now)).collect()
}

/// Convert a single arrival record.
pub fn convert_arrival(dto: &ArrivalDto, now: DateTime<Utc>) -> Arrival {
    let line_id = non_blank(dto.line_id.as_deref()).unwrap_or_default();
    let line_name = non_blank(dto.line_name.as_deref())
        .or_else(|| non_blank(dto.line_id.as_deref()))
        .unwrap_or_else(|| UNKNOWN_LINE.to_string());

    let destination = non_blank(dto.destination_name.as_deref())
        .or_else(|| non_blank(dto.towards.as_deref()))
        .and_then(|d| clean_destination(&d));

    Arrival {
        line_name,
        line_id,
        destination,
        seconds_to_arrival: seconds_to_arrival(dto, now),
        mode: non_blank(dto.mode_name.as_deref()).map(|m| TransportMode::from_mode_name(&m)),
        platform: non_blank(dto.platform_name.as_deref()),
    }
}

/// Strip a trailing comma-separated qualifier from a destination.
///
/// "Canary Wharf, Poplar" becomes "Canary Wharf". Returns `None` if nothing
/// is left.
pub fn clean_destination(name: &str) -> Option<String> {
    let head = name.split(',').next().unwrap_or_default().trim();
    if head.is_empty() {
        None
    } else {
        Some(head.to_string())
    }
}

/// Seconds until arrival, preferring the countdown over the timestamp.
fn seconds_to_arrival(dto: &ArrivalDto, now: DateTime<Utc>) -> Option<i64> {
    if let Some(secs) = dto.time_to_station {
        return Some(secs);
    }

    let expected = dto.expected_arrival.as_deref()?;
    match DateTime::parse_from_rfc3339(expected) {
        Ok(at) => Some((at.with_timezone(&Utc) - now).num_seconds()),
        Err(e) => {
            warn!(expected, error = %e, "ignoring unparseable expectedArrival");
            None
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
