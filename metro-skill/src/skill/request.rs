//! Inbound request envelope DTOs.
//!
//! These types map the voice platform's request JSON. The platform sends
//! one of three request kinds, discriminated by the `type` field; intents
//! carry a slot map whose `Station` slot holds the phrase as spoken.

use std::collections::HashMap;

use serde::Deserialize;

/// Slot name carrying the spoken station phrase.
pub const STATION_SLOT: &str = "Station";

/// Top-level inbound envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    pub version: Option<String>,
    pub session: Session,
    pub request: Request,
}

impl RequestEnvelope {
    /// The spoken station phrase, if this is an intent request whose
    /// `Station` slot has a value.
    pub fn station_phrase(&self) -> Option<&str> {
        match &self.request {
            Request::Intent { intent, .. } => intent.slot_value(STATION_SLOT),
            _ => None,
        }
    }
}

/// Session metadata for the request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether this request starts a new session.
    #[serde(default)]
    pub new: bool,

    pub session_id: Option<String>,

    pub application: Option<Application>,
}

/// The skill application this request was routed to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: Option<String>,
}

/// One inbound request, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// The user opened the skill without asking anything yet.
    #[serde(rename = "LaunchRequest")]
    Launch {
        #[serde(rename = "requestId")]
        request_id: Option<String>,
    },

    /// The user spoke an utterance that resolved to an intent.
    #[serde(rename = "IntentRequest")]
    Intent {
        #[serde(rename = "requestId")]
        request_id: Option<String>,
        intent: Intent,
    },

    /// The platform closed the session.
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded {
        #[serde(rename = "requestId")]
        request_id: Option<String>,
        reason: Option<String>,
    },
}

impl Request {
    /// The platform request id, when one was sent.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Request::Launch { request_id }
            | Request::Intent { request_id, .. }
            | Request::SessionEnded { request_id, .. } => request_id.as_deref(),
        }
    }
}

/// A resolved intent with its slot map.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,

    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// The value of a named slot, if present and filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|s| s.value.as_deref())
    }
}

/// A named argument extracted from the utterance.
///
/// The platform sends slots without a value when the user's utterance
/// did not fill them.
#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_launch_request() {
        let json = r#"{
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "amzn1.echo-api.session.abc",
                "application": {"applicationId": "amzn1.ask.skill.xyz"}
            },
            "request": {
                "type": "LaunchRequest",
                "requestId": "amzn1.echo-api.request.001"
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();

        assert!(envelope.session.new);
        assert_eq!(
            envelope.session.session_id.as_deref(),
            Some("amzn1.echo-api.session.abc")
        );
        assert!(matches!(envelope.request, Request::Launch { .. }));
        assert_eq!(
            envelope.request.request_id(),
            Some("amzn1.echo-api.request.001")
        );
    }

    #[test]
    fn deserialize_intent_request_with_station_slot() {
        let json = r#"{
            "version": "1.0",
            "session": {"new": false, "sessionId": "amzn1.echo-api.session.abc"},
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.002",
                "intent": {
                    "name": "TrainQuery",
                    "slots": {
                        "Station": {"name": "Station", "value": "Target Field"}
                    }
                }
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.station_phrase(), Some("Target Field"));
        let Request::Intent { intent, .. } = &envelope.request else {
            panic!("expected intent request");
        };
        assert_eq!(intent.name, "TrainQuery");
    }

    #[test]
    fn unfilled_slot_has_no_value() {
        let json = r#"{
            "session": {"new": false},
            "request": {
                "type": "IntentRequest",
                "requestId": "r",
                "intent": {
                    "name": "TrainQuery",
                    "slots": {"Station": {"name": "Station"}}
                }
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.station_phrase(), None);
    }

    #[test]
    fn missing_slot_map_defaults_to_empty() {
        let json = r#"{
            "session": {"new": false},
            "request": {
                "type": "IntentRequest",
                "requestId": "r",
                "intent": {"name": "AMAZON.HelpIntent"}
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        let Request::Intent { intent, .. } = &envelope.request else {
            panic!("expected intent request");
        };
        assert!(intent.slots.is_empty());
    }

    #[test]
    fn deserialize_session_ended_request() {
        let json = r#"{
            "session": {"new": false, "sessionId": "s"},
            "request": {
                "type": "SessionEndedRequest",
                "requestId": "r",
                "reason": "USER_INITIATED"
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(
            envelope.request,
            Request::SessionEnded { ref reason, .. } if reason.as_deref() == Some("USER_INITIATED")
        ));
    }

    #[test]
    fn unknown_request_type_is_an_error() {
        let json = r#"{
            "session": {"new": false},
            "request": {"type": "AudioPlayerRequest", "requestId": "r"}
        }"#;

        assert!(serde_json::from_str::<RequestEnvelope>(json).is_err());
    }
}
