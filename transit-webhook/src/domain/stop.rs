//! Stop identifier types.

use std::fmt;

/// Longest identifier we accept. TfL NaPTAN codes top out around 12 characters.
const MAX_LEN: usize = 20;

/// Lengths of bare numeric codes that we trust without a lookup.
const LITERAL_LENGTHS: [usize; 2] = [5, 9];

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop identifier: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A stop identifier as understood by the TfL API.
///
/// Station codes look like `9400ZZLUWLO`; bus stop codes like `490008660N`
/// carry a trailing stop letter. The value is opaque to us beyond being a
/// short run of ASCII letters and digits, which keeps it safe to embed in a
/// URL path.
///
/// # Examples
///
/// ```
/// use transit_webhook::domain::StopId;
///
/// let stop = StopId::parse("490008660N").unwrap();
/// assert_eq!(stop.as_str(), "490008660N");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("canary wharf").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier.
    ///
    /// The input must be 1 to 20 ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidStopId {
                reason: "must be at most 20 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStopId {
                reason: "must be ASCII letters and digits",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Recognise a literal numeric stop code typed by the user.
    ///
    /// Only bare 5- or 9-digit strings qualify (SMS bus stop codes and
    /// the numeric part of NaPTAN codes). Anything else must go through
    /// name resolution.
    pub fn literal(input: &str) -> Option<Self> {
        let input = input.trim();
        let is_literal = LITERAL_LENGTHS.contains(&input.len())
            && input.bytes().all(|b| b.is_ascii_digit());

        if is_literal {
            Some(StopId(input.to_string()))
        } else {
            None
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
