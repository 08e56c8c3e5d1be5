//! Web layer for the skill.
//!
//! Exposes the skill as one POST endpoint receiving the request envelope,
//! plus a health check.

mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
