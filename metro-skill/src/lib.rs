//! Green Line next-train voice skill.
//!
//! A voice-assistant backend that answers: "when is the next train
//! at this station?" for the METRO Green Line, using Metro Transit's
//! real-time NexTrip departures.

pub mod board;
pub mod directory;
pub mod nextrip;
pub mod skill;
pub mod speech;
pub mod web;
