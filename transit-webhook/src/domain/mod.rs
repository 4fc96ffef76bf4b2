//! Domain types for transit arrival queries.
//!
//! Everything here is validated at construction and lives only for the
//! duration of one request.

mod arrival;
mod route;
mod stop;

pub use arrival::{Arrival, TransportMode};
pub use route::RouteFilter;
pub use stop::{InvalidStopId, StopId};
