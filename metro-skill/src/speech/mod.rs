//! Spoken responses and the outbound envelope.
//!
//! `compose` turns aggregated departures (and the other intents) into
//! [`SpeechResponse`] values; `response` defines that type and the wire
//! envelope it is wrapped in.

pub mod compose;
mod response;

pub use response::{
    Card, OutputSpeech, Reprompt, ResponseEnvelope, SpeechResponse, SpeechletResponse,
};
