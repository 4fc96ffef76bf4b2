//! Arrival predictions.

use std::fmt;

use serde::Serialize;

/// Mode of transport serving an arrival.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Bus,
    Tube,
    Dlr,
    Overground,
    ElizabethLine,
    Tram,
    NationalRail,
    RiverBus,
    CableCar,
    /// Any mode name we don't recognise, kept verbatim.
    Other(String),
}

impl TransportMode {
    /// Parse a TfL `modeName` value (e.g. `"bus"`, `"elizabeth-line"`).
    pub fn from_mode_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bus" => TransportMode::Bus,
            "tube" => TransportMode::Tube,
            "dlr" => TransportMode::Dlr,
            "overground" => TransportMode::Overground,
            "elizabeth-line" => TransportMode::ElizabethLine,
            "tram" => TransportMode::Tram,
            "national-rail" => TransportMode::NationalRail,
            "river-bus" => TransportMode::RiverBus,
            "cable-car" => TransportMode::CableCar,
            _ => TransportMode::Other(name.trim().to_string()),
        }
    }

    /// The TfL mode name for this mode.
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Tube => "tube",
            TransportMode::Dlr => "dlr",
            TransportMode::Overground => "overground",
            TransportMode::ElizabethLine => "elizabeth-line",
            TransportMode::Tram => "tram",
            TransportMode::NationalRail => "national-rail",
            TransportMode::RiverBus => "river-bus",
            TransportMode::CableCar => "cable-car",
            TransportMode::Other(name) => name,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransportMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One predicted vehicle arrival at a stop.
///
/// Built from the upstream payload by the normalizer in `tfl::convert`,
/// so every field here has already had its fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// Display name of the line (e.g. "25", "Jubilee").
    pub line_name: String,

    /// Line identifier (e.g. "25", "jubilee"). Empty if upstream omitted it.
    pub line_id: String,

    /// Destination with any trailing qualifier removed.
    pub destination: Option<String>,

    /// Seconds until arrival. Negative if the predicted time has passed.
    /// `None` when upstream gave no usable time.
    pub seconds_to_arrival: Option<i64>,

    /// `None` when upstream didn't say.
    pub mode: Option<TransportMode>,

    pub platform: Option<String>,
}

impl Arrival {
    /// Create an arrival for the given line, with no destination or timing yet.
    pub fn new(line_name: impl Into<String>, line_id: impl Into<String>) -> Self {
        Self {
            line_name: line_name.into(),
            line_id: line_id.into(),
            destination: None,
            seconds_to_arrival: None,
            mode: None,
            platform: None,
        }
    }

    /// Set the destination.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Set the seconds until arrival.
    pub fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds_to_arrival = Some(seconds);
        self
    }

    /// Set the transport mode.
    pub fn with_mode(mut self, mode: TransportMode) -> Self {
        self.mode = Some(mode);
        self
    }
}
