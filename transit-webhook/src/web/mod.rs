//! Web layer for the transit arrivals webhook.
//!
//! Provides the agent webhook plus a health check and a JSON arrivals
//! endpoint for operators.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
