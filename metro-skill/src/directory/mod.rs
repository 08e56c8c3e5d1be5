//! Station directory for the METRO Green Line.
//!
//! Maps spoken station phrases to canonical stations, and stations to the
//! per-direction NexTrip stop codes used for upstream queries. The tables
//! are fixed at compile time and safe to share across concurrent requests.

mod direction;
mod station;
mod stop_code;

pub use direction::Direction;
pub use station::{Station, StopCodes};
pub use stop_code::{InvalidStopCode, StopCode};
