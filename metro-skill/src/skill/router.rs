//! Intent routing.
//!
//! Dispatches an inbound envelope to the right handler: canned responses
//! for launch/help/stop, the query pipeline for `TrainQuery`, an empty
//! acknowledgement for session-ended. Every per-request problem is
//! converted to speech here; only an unknown intent name escapes as an
//! error.

use tracing::{info, warn};

use crate::board::{self, ArrivalsSource, BoardError};
use crate::directory::Station;
use crate::speech::{ResponseEnvelope, compose};

use super::error::SkillError;
use super::request::{Intent, Request, RequestEnvelope, STATION_SLOT};

/// Intent kinds this skill recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntentKind {
    Query,
    Help,
    StopOrCancel,
}

impl IntentKind {
    /// Classify an intent by its platform name.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "TrainQuery" => Some(IntentKind::Query),
            "AMAZON.HelpIntent" => Some(IntentKind::Help),
            "AMAZON.StopIntent" | "AMAZON.CancelIntent" => Some(IntentKind::StopOrCancel),
            _ => None,
        }
    }
}

/// The skill's request handler.
///
/// Holds the departure source; the station directory is static. One
/// `Skill` serves concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct Skill<S> {
    source: S,
}

impl<S: ArrivalsSource> Skill<S> {
    /// Create a skill over the given departure source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Handle one inbound envelope.
    ///
    /// Returns the outbound envelope, or `SkillError::UnknownIntent` when
    /// the intent name is outside the recognized set.
    pub async fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        if envelope.session.new {
            info!(
                session_id = envelope.session.session_id.as_deref().unwrap_or(""),
                "session started"
            );
        }

        match &envelope.request {
            Request::Launch { request_id } => {
                info!(request_id = request_id.as_deref().unwrap_or(""), "launch");
                Ok(compose::welcome().into_envelope())
            }
            Request::Intent { request_id, intent } => {
                info!(
                    request_id = request_id.as_deref().unwrap_or(""),
                    intent = intent.name.as_str(),
                    "intent"
                );
                self.handle_intent(intent).await
            }
            Request::SessionEnded { request_id, reason } => {
                info!(
                    request_id = request_id.as_deref().unwrap_or(""),
                    reason = reason.as_deref().unwrap_or(""),
                    "session ended"
                );
                Ok(ResponseEnvelope::empty())
            }
        }
    }

    async fn handle_intent(&self, intent: &Intent) -> Result<ResponseEnvelope, SkillError> {
        let kind = IntentKind::from_name(&intent.name)
            .ok_or_else(|| SkillError::UnknownIntent(intent.name.clone()))?;

        let response = match kind {
            IntentKind::Help => compose::welcome(),
            IntentKind::StopOrCancel => compose::farewell(),
            IntentKind::Query => self.train_query(intent).await,
        };

        Ok(response.into_envelope())
    }

    /// The query pipeline: phrase → station → both boards → sentence pair.
    async fn train_query(&self, intent: &Intent) -> crate::speech::SpeechResponse {
        let Some(phrase) = intent.slot_value(STATION_SLOT) else {
            return compose::unknown_station();
        };

        let Some(station) = Station::resolve(phrase) else {
            return compose::unknown_station();
        };

        match board::next_departures(&self.source, station.stop_codes()).await {
            Ok(board) => compose::train_times(phrase, &board),
            Err(BoardError::NoDepartures(direction)) => {
                info!(%station, %direction, "no departures");
                compose::no_departures(phrase)
            }
            Err(BoardError::Upstream(e)) => {
                warn!(%station, error = %e, "upstream fetch failed");
                compose::upstream_trouble(phrase)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Direction;
    use crate::nextrip::MockNexTripClient;

    fn envelope(json: serde_json::Value) -> RequestEnvelope {
        serde_json::from_value(json).unwrap()
    }

    fn intent_envelope(name: &str, station: Option<&str>) -> RequestEnvelope {
        let slots = match station {
            Some(value) => serde_json::json!({
                "Station": {"name": "Station", "value": value}
            }),
            None => serde_json::json!({}),
        };
        envelope(serde_json::json!({
            "version": "1.0",
            "session": {"new": false, "sessionId": "s"},
            "request": {
                "type": "IntentRequest",
                "requestId": "r",
                "intent": {"name": name, "slots": slots}
            }
        }))
    }

    fn speech_of(response: &ResponseEnvelope) -> &str {
        response
            .response
            .as_ref()
            .unwrap()
            .output_speech
            .text
            .as_deref()
            .unwrap()
    }

    fn ends_session(response: &ResponseEnvelope) -> bool {
        response.response.as_ref().unwrap().should_end_session
    }

    fn target_field_mock() -> MockNexTripClient {
        let codes = Station::TargetField.stop_codes();
        MockNexTripClient::new()
            .with_departures(Direction::East, codes.east, &["2 Min", "12 Min"])
            .with_departures(Direction::West, codes.west, &["5 Min", "15 Min"])
    }

    #[tokio::test]
    async fn launch_gets_welcome() {
        let skill = Skill::new(MockNexTripClient::new());
        let request = envelope(serde_json::json!({
            "version": "1.0",
            "session": {"new": true, "sessionId": "s"},
            "request": {"type": "LaunchRequest", "requestId": "r"}
        }));

        let response = skill.handle(&request).await.unwrap();

        assert_eq!(
            speech_of(&response),
            "Ask Me which station you would like the train times for."
        );
        assert!(!ends_session(&response));
    }

    #[tokio::test]
    async fn help_matches_welcome() {
        let skill = Skill::new(MockNexTripClient::new());

        let response = skill
            .handle(&intent_envelope("AMAZON.HelpIntent", None))
            .await
            .unwrap();

        assert_eq!(
            speech_of(&response),
            "Ask Me which station you would like the train times for."
        );
        assert!(!ends_session(&response));
    }

    #[tokio::test]
    async fn stop_and_cancel_say_goodbye() {
        let skill = Skill::new(MockNexTripClient::new());

        for name in ["AMAZON.StopIntent", "AMAZON.CancelIntent"] {
            let response = skill.handle(&intent_envelope(name, None)).await.unwrap();
            assert_eq!(speech_of(&response), "Thank You for using Metro");
            assert!(ends_session(&response));
        }
    }

    #[tokio::test]
    async fn query_answers_and_ends_session() {
        let skill = Skill::new(target_field_mock());

        let response = skill
            .handle(&intent_envelope("TrainQuery", Some("Target Field")))
            .await
            .unwrap();

        assert_eq!(
            speech_of(&response),
            "The Next eastbound trains for the Target Field Station is in 2 minutes and in 12 minutes. \
             The Next westbound trains for the Target Field Station is in 5 minutes and in 15 minutes."
        );
        assert!(ends_session(&response));
        assert_eq!(
            response.response.as_ref().unwrap().card.title,
            "Train Times - Target Field"
        );
    }

    #[tokio::test]
    async fn unknown_station_phrase_reprompts() {
        let skill = Skill::new(target_field_mock());

        let response = skill
            .handle(&intent_envelope("TrainQuery", Some("Foo Bar")))
            .await
            .unwrap();

        assert_eq!(
            speech_of(&response),
            "I don't recognize that station. Please try again."
        );
        assert!(!ends_session(&response));
        assert!(
            response
                .response
                .as_ref()
                .unwrap()
                .reprompt
                .output_speech
                .text
                .is_some()
        );
    }

    #[tokio::test]
    async fn missing_station_slot_reprompts() {
        let skill = Skill::new(target_field_mock());

        let response = skill
            .handle(&intent_envelope("TrainQuery", None))
            .await
            .unwrap();

        assert_eq!(
            speech_of(&response),
            "I don't recognize that station. Please try again."
        );
        assert!(!ends_session(&response));
    }

    #[tokio::test]
    async fn empty_direction_becomes_no_departures_speech() {
        let codes = Station::TargetField.stop_codes();
        let mock = MockNexTripClient::new().with_departures(
            Direction::West,
            codes.west,
            &["5 Min", "15 Min"],
        );
        let skill = Skill::new(mock);

        let response = skill
            .handle(&intent_envelope("TrainQuery", Some("Target Field")))
            .await
            .unwrap();

        assert!(speech_of(&response).contains("no upcoming trains"));
        assert!(ends_session(&response));
    }

    #[tokio::test]
    async fn upstream_failure_becomes_apology() {
        let codes = Station::TargetField.stop_codes();
        let mock = MockNexTripClient::new()
            .with_departures(Direction::East, codes.east, &["2 Min"])
            .with_failure(Direction::West, codes.west);
        let skill = Skill::new(mock);

        let response = skill
            .handle(&intent_envelope("TrainQuery", Some("Target Field")))
            .await
            .unwrap();

        assert!(speech_of(&response).contains("trouble reaching Metro Transit"));
        assert!(ends_session(&response));
    }

    #[tokio::test]
    async fn unknown_intent_is_fatal() {
        let skill = Skill::new(MockNexTripClient::new());

        let result = skill
            .handle(&intent_envelope("AMAZON.ShuffleOnIntent", None))
            .await;

        assert_eq!(
            result.unwrap_err(),
            SkillError::UnknownIntent("AMAZON.ShuffleOnIntent".to_string())
        );
    }

    #[tokio::test]
    async fn session_ended_gets_empty_envelope() {
        let skill = Skill::new(MockNexTripClient::new());
        let request = envelope(serde_json::json!({
            "session": {"new": false, "sessionId": "s"},
            "request": {"type": "SessionEndedRequest", "requestId": "r", "reason": "USER_INITIATED"}
        }));

        let response = skill.handle(&request).await.unwrap();

        assert!(response.response.is_none());
    }
}
