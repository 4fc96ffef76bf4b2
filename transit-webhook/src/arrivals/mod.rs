//! Arrival ranking and rendering.
//!
//! Given a stop, fetch its live predictions, keep those on the requested
//! route, order them soonest first, and describe the first few in plain
//! English.

mod board;
mod format;
mod rank;

pub use board::ArrivalFormatter;
pub use format::{SENTENCE_SEPARATOR, describe_wait, render_arrival, render_arrivals};
pub use rank::{EmptyBoard, MAX_ARRIVALS, rank_arrivals, sort_by_eta};
