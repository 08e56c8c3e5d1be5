//! Application state for the web layer.

use std::sync::Arc;

use crate::nextrip::NexTripClient;
use crate::skill::Skill;

/// Shared application state.
///
/// The skill itself is stateless per request; sharing one instance shares
/// the underlying HTTP client's connection pool.
#[derive(Clone)]
pub struct AppState {
    /// The skill request handler
    pub skill: Arc<Skill<NexTripClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(skill: Skill<NexTripClient>) -> Self {
        Self {
            skill: Arc::new(skill),
        }
    }
}
