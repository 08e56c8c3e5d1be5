//! NexTrip real-time departures client.
//!
//! This module provides an HTTP client for the Metro Transit NexTrip API,
//! which reports upcoming departures per stop and direction.
//!
//! Key characteristics of NexTrip:
//! - The direction code and stop code are path segments, not query
//!   parameters; `format=json` selects the JSON response
//! - Departure lists are upstream-ordered, soonest first
//! - `DepartureText` is either a countdown ("14 Min") or a clock time
//!   ("9:45"), and is interpreted only at speech-composition time

mod client;
mod error;
mod mock;
mod types;

pub use client::{NexTripClient, NexTripConfig};
pub use error::NexTripError;
pub use mock::MockNexTripClient;
pub use types::Departure;
