//! Mock NexTrip client for testing without API access.
//!
//! Serves preloaded per-(direction, stop) departure boards as if they were
//! live API responses, and can be told to fail a given board to exercise
//! upstream-failure paths.

use std::collections::{HashMap, HashSet};

use crate::directory::{Direction, StopCode};

use super::error::NexTripError;
use super::types::Departure;

/// Mock NexTrip client backed by in-memory boards.
///
/// Mimics `NexTripClient::departures`. Boards that were never loaded come
/// back empty, the same as a stop with no upcoming service.
#[derive(Debug, Clone, Default)]
pub struct MockNexTripClient {
    boards: HashMap<(Direction, StopCode), Vec<Departure>>,
    failing: HashSet<(Direction, StopCode)>,
}

impl MockNexTripClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a board with departures described by their departure text.
    pub fn with_departures(mut self, direction: Direction, stop: StopCode, texts: &[&str]) -> Self {
        let board = texts.iter().map(|t| stub_departure(direction, t)).collect();
        self.boards.insert((direction, stop), board);
        self
    }

    /// Make requests for the given board fail with an API error.
    pub fn with_failure(mut self, direction: Direction, stop: StopCode) -> Self {
        self.failing.insert((direction, stop));
        self
    }

    /// Serve the preloaded board for one stop in one direction.
    pub async fn departures(
        &self,
        direction: Direction,
        stop: StopCode,
    ) -> Result<Vec<Departure>, NexTripError> {
        if self.failing.contains(&(direction, stop)) {
            return Err(NexTripError::Api {
                status: 503,
                message: format!("mock failure for {} {}", direction, stop),
            });
        }

        Ok(self
            .boards
            .get(&(direction, stop))
            .cloned()
            .unwrap_or_default())
    }
}

/// Build a plausible departure record around the given departure text.
fn stub_departure(direction: Direction, text: &str) -> Departure {
    Departure {
        actual: Some(true),
        block_number: None,
        departure_text: text.to_string(),
        departure_time: None,
        description: None,
        gate: None,
        route: Some("902".to_string()),
        route_direction: Some(direction.label().to_uppercase()),
        terminal: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(code: &str) -> StopCode {
        StopCode::parse(code).unwrap()
    }

    #[tokio::test]
    async fn serves_preloaded_boards() {
        let mock = MockNexTripClient::new().with_departures(
            Direction::East,
            stop("TF12"),
            &["2 Min", "12 Min"],
        );

        let board = mock.departures(Direction::East, stop("TF12")).await.unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].departure_text, "2 Min");
        assert_eq!(board[1].departure_text, "12 Min");
    }

    #[tokio::test]
    async fn unloaded_board_is_empty() {
        let mock = MockNexTripClient::new();
        let board = mock.departures(Direction::West, stop("TF11")).await.unwrap();
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn failure_injection() {
        let mock = MockNexTripClient::new().with_failure(Direction::East, stop("TF12"));
        let result = mock.departures(Direction::East, stop("TF12")).await;
        assert!(matches!(result, Err(NexTripError::Api { status: 503, .. })));
    }
}
