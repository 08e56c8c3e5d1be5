//! NexTrip API response DTOs.
//!
//! These types map directly to the NexTrip JSON responses. The upstream
//! returns PascalCase keys and omits fields it has no data for, so most
//! fields are `Option`. `DepartureText` is the one field the skill depends
//! on: a payload without it is malformed, which is a different failure than
//! an empty departure list.

use serde::Deserialize;

/// One upcoming departure from a stop, soonest first in the response.
///
/// `departure_text` is either a countdown ("14 Min") or a clock time
/// ("9:45"); it is carried through verbatim and only interpreted when the
/// spoken response is composed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Departure {
    /// Whether the time is based on live vehicle data rather than schedule.
    pub actual: Option<bool>,

    /// Block number of the vehicle operating this trip.
    pub block_number: Option<i32>,

    /// Display text for the departure: a countdown or a clock time.
    pub departure_text: String,

    /// Raw departure timestamp (e.g. `/Date(1528936200000-0500)/`).
    pub departure_time: Option<String>,

    /// Route description (e.g. "METRO Blue Line", "METRO Green Line").
    pub description: Option<String>,

    /// Boarding gate, where the stop has one.
    pub gate: Option<String>,

    /// Route identifier (e.g. "902").
    pub route: Option<String>,

    /// Direction of travel as the API spells it (e.g. "EASTBOUND").
    pub route_direction: Option<String>,

    /// Route terminal letter, if any.
    pub terminal: Option<String>,
}
