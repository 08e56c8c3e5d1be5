//! Two-direction departure aggregation.
//!
//! Answering one station query takes two upstream lookups, one per
//! direction. This module fans both out concurrently, keeps at most the two
//! soonest departures per direction, and fails the whole query if either
//! direction comes back empty or unavailable. Partial results are never
//! returned: a station either has an answer for both platforms or no answer
//! at all.

use crate::directory::{Direction, StopCode, StopCodes};
use crate::nextrip::{Departure, MockNexTripClient, NexTripClient, NexTripError};

/// Source of per-direction departure boards.
///
/// The seam between the aggregator and the concrete HTTP client; tests run
/// the aggregation against [`MockNexTripClient`].
pub trait ArrivalsSource {
    /// Fetch the upcoming departures for one stop in one direction.
    fn departures(
        &self,
        direction: Direction,
        stop: StopCode,
    ) -> impl Future<Output = Result<Vec<Departure>, NexTripError>> + Send;
}

impl ArrivalsSource for NexTripClient {
    async fn departures(
        &self,
        direction: Direction,
        stop: StopCode,
    ) -> Result<Vec<Departure>, NexTripError> {
        NexTripClient::departures(self, direction, stop).await
    }
}

impl ArrivalsSource for MockNexTripClient {
    async fn departures(
        &self,
        direction: Direction,
        stop: StopCode,
    ) -> Result<Vec<Departure>, NexTripError> {
        MockNexTripClient::departures(self, direction, stop).await
    }
}

/// Errors from aggregating a station's departure boards.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// One direction's board was empty, so the query has no answer
    #[error("no upcoming {0} departures")]
    NoDepartures(Direction),

    /// One direction's fetch failed
    #[error("upstream unavailable: {0}")]
    Upstream(#[from] NexTripError),
}

/// The next departures for both directions at one station.
///
/// Each list holds the one or two soonest departures in upstream order.
/// Values are only ever constructed with both directions populated.
#[derive(Debug, Clone)]
pub struct NextDepartures {
    pub east: Vec<Departure>,
    pub west: Vec<Departure>,
}

/// Fetch and aggregate the next departures for a station.
///
/// Both direction fetches are started together and awaited together; the
/// result is reported only once both have resolved. Each board is truncated
/// to its first two records, preserving upstream order.
pub async fn next_departures<S: ArrivalsSource>(
    source: &S,
    codes: StopCodes,
) -> Result<NextDepartures, BoardError> {
    let (east, west) = tokio::join!(
        source.departures(Direction::East, codes.east),
        source.departures(Direction::West, codes.west),
    );

    let east = soonest_two(Direction::East, east?)?;
    let west = soonest_two(Direction::West, west?)?;

    Ok(NextDepartures { east, west })
}

/// Keep the first two records of an upstream-ordered board.
///
/// An empty board fails the aggregation; there is no partial answer for a
/// station with service in only one direction.
fn soonest_two(
    direction: Direction,
    mut board: Vec<Departure>,
) -> Result<Vec<Departure>, BoardError> {
    if board.is_empty() {
        return Err(BoardError::NoDepartures(direction));
    }
    board.truncate(2);
    Ok(board)
}
