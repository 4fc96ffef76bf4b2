//! Natural-language rendering of arrivals.

use crate::domain::Arrival;

/// Separator between arrival sentences in one reply.
pub const SENTENCE_SEPARATOR: &str = "\n";

/// Describe how long until an arrival.
///
/// Under a minute (or already passed) is "is due"; otherwise whole minutes,
/// truncated, so 119 seconds is still "1 minute".
///
/// # Examples
///
/// ```
/// use transit_webhook::arrivals::describe_wait;
///
/// assert_eq!(describe_wait(Some(59)), "is due");
/// assert_eq!(describe_wait(Some(60)), "is in 1 minute");
/// assert_eq!(describe_wait(Some(190)), "is in 3 minutes");
/// ```
pub fn describe_wait(seconds: Option<i64>) -> String {
    let Some(seconds) = seconds else {
        return "has no arrival estimate yet".to_string();
    };

    match seconds / 60 {
        m if m < 1 => "is due".to_string(),
        1 => "is in 1 minute".to_string(),
        m => format!("is in {m} minutes"),
    }
}

/// Render one arrival as a sentence, e.g. "The 25 to Oxford Circus is in 3 minutes."
pub fn render_arrival(arrival: &Arrival) -> String {
    let wait = describe_wait(arrival.seconds_to_arrival);
    match &arrival.destination {
        Some(destination) => format!("The {} to {} {}.", arrival.line_name, destination, wait),
        None => format!("The {} {}.", arrival.line_name, wait),
    }
}

/// Render arrivals as sentences, one per line.
pub fn render_arrivals(arrivals: &[Arrival]) -> String {
    arrivals
        .iter()
        .map(render_arrival)
        .collect::<Vec<_>>()
        .join(SENTENCE_SEPARATOR)
}
