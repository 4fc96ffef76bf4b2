//! Well-known stop names.
//!
//! Users tend to ask about a handful of big stations and landmarks by name.
//! Resolving those from a fixed table saves a search call and avoids the
//! search endpoint picking an obscure stop with a similar name.

use std::collections::HashMap;

use crate::domain::StopId;

/// Static name → stop lookup.
///
/// Names are stored normalized (trimmed, lowercase), so lookups are
/// case-insensitive. Built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: HashMap<String, StopId>,
}

impl Gazetteer {
    /// Create an empty gazetteer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Replaces any existing entry with the same name.
    pub fn add(&mut self, name: &str, stop: StopId) {
        self.entries.insert(normalize(name), stop);
    }

    /// Look up a stop by name.
    pub fn get(&self, name: &str) -> Option<&StopId> {
        self.entries.get(&normalize(name))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a stop name for lookup.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Builder for creating a gazetteer.
///
/// Provides a fluent API for adding entries.
#[derive(Debug, Default)]
pub struct GazetteerBuilder {
    inner: Gazetteer,
}

impl GazetteerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Entries with an invalid stop id are skipped.
    pub fn add(mut self, name: &str, stop: &str) -> Self {
        if let Ok(stop) = StopId::parse(stop) {
            self.inner.add(name, stop);
        }
        self
    }

    /// Build the gazetteer.
    pub fn build(self) -> Gazetteer {
        self.inner
    }
}

/// Create the default set of London stops.
pub fn london_stops() -> Gazetteer {
    GazetteerBuilder::new()
        // Bus stops (NaPTAN code with stop letter)
        .add("canary wharf", "490008660N") // Canary Wharf Station / Poplar River, stop N
        .add("london bridge", "490009224S") // London Bridge Station / Borough High St, stop S
        .add("trafalgar square", "490007804S") // Trafalgar Sq / Charing Cross Stn
        // Underground stations
        .add("waterloo station", "9400ZZLUWLO")
        .add("victoria station", "9400ZZLUVIC")
        .add("paddington station", "9400ZZLUPAC")
        .add("green park", "9400ZZLUGPK")
        .add("kings cross", "9400ZZLUKGN")
        .add("liverpool street", "9400ZZLULST")
        .add("stratford", "9400ZZLUSTD")
        .add("euston station", "9400ZZLUEUS")
        .build()
}
