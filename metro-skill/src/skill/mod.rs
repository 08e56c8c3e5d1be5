//! Intent routing over the inbound request envelope.
//!
//! The platform delivers launch, intent, and session-ended requests; this
//! module classifies them, runs the query pipeline for `TrainQuery`, and
//! converts every per-request problem into speech. Only an unrecognized
//! intent name is treated as a failure of the invocation itself.

mod error;
mod request;
mod router;

pub use error::SkillError;
pub use request::{Application, Intent, Request, RequestEnvelope, STATION_SLOT, Session, Slot};
pub use router::Skill;
