//! Transit arrivals webhook.
//!
//! Answers "when is the next bus at ...?" for a conversational agent:
//! resolves a spoken stop name to a TfL stop, fetches live arrivals and
//! phrases the soonest few as short sentences.

pub mod arrivals;
pub mod config;
pub mod domain;
pub mod error;
pub mod gazetteer;
pub mod resolve;
pub mod service;
pub mod tfl;
pub mod web;
