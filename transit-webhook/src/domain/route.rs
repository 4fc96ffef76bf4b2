//! Route filtering.

use super::Arrival;

/// A user-supplied route restriction, normalized for comparison.
///
/// Matching is exact and case-insensitive against either the line name or
/// the line identifier. "N25" does not match "25".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFilter {
    raw: String,
    normalized: String,
}

impl RouteFilter {
    /// Build a filter from user input.
    ///
    /// Returns `None` for blank input, which means "any route".
    pub fn new(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            raw: trimmed.to_string(),
            normalized: trimmed.to_lowercase(),
        })
    }

    /// The route as the user typed it (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the arrival is on this route.
    pub fn matches(&self, arrival: &Arrival) -> bool {
        self.normalized == arrival.line_name.trim().to_lowercase()
            || self.normalized == arrival.line_id.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_no_filter() {
        assert!(RouteFilter::new("").is_none());
        assert!(RouteFilter::new("   ").is_none());
    }

    #[test]
    fn keeps_trimmed_raw_text() {
        let filter = RouteFilter::new("  N25 ").unwrap();
        assert_eq!(filter.as_str(), "N25");
    }

    #[test]
    fn matches_line_name_case_insensitively() {
        let filter = RouteFilter::new("jubilee").unwrap();
        assert!(filter.matches(&Arrival::new("Jubilee", "")));
    }

    #[test]
    fn matches_line_id() {
        let filter = RouteFilter::new("ELIZABETH").unwrap();
        assert!(filter.matches(&Arrival::new("Elizabeth line", "elizabeth")));
    }

    #[test]
    fn exact_match_only() {
        let filter = RouteFilter::new("25").unwrap();
        assert!(filter.matches(&Arrival::new("25", "25")));
        assert!(!filter.matches(&Arrival::new("N25", "n25")));
        assert!(!filter.matches(&Arrival::new("250", "250")));
        assert!(!filter.matches(&Arrival::new("2", "2")));
    }

    #[test]
    fn empty_line_id_does_not_match() {
        let filter = RouteFilter::new("25").unwrap();
        assert!(!filter.matches(&Arrival::new("N25", "")));
    }
}
