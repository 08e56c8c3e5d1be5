//! Speech response and outbound envelope types.
//!
//! [`SpeechResponse`] is what the intent router produces: the card title,
//! the spoken text, an optional reprompt, and whether the session ends.
//! The envelope types below wrap it in the voice platform's wire format.

use serde::Serialize;

/// Envelope format version.
const VERSION: &str = "1.0";

/// The one speech type this skill emits.
const PLAIN_TEXT: &str = "PlainText";

/// The one card type this skill emits.
const SIMPLE_CARD: &str = "Simple";

/// One spoken answer, built once per request and returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResponse {
    /// Card title shown in the companion app.
    pub title: String,

    /// The text to speak.
    pub speech: String,

    /// Text to speak if the user stays silent; `None` ends the exchange.
    pub reprompt: Option<String>,

    /// Whether the session closes after this response.
    pub end_session: bool,
}

impl SpeechResponse {
    /// Wrap this response in the outbound envelope.
    pub fn into_envelope(self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: VERSION,
            session_attributes: serde_json::Map::new(),
            response: Some(SpeechletResponse {
                output_speech: OutputSpeech {
                    kind: PLAIN_TEXT,
                    text: Some(self.speech.clone()),
                },
                card: Card {
                    kind: SIMPLE_CARD,
                    title: self.title,
                    content: self.speech,
                },
                reprompt: Reprompt {
                    output_speech: OutputSpeech {
                        kind: PLAIN_TEXT,
                        text: self.reprompt,
                    },
                },
                should_end_session: self.end_session,
            }),
        }
    }
}

/// Top-level outbound envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,

    /// Session attributes carried across turns; this skill keeps none.
    pub session_attributes: serde_json::Map<String, serde_json::Value>,

    /// Absent for session-ended acknowledgements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SpeechletResponse>,
}

impl ResponseEnvelope {
    /// An envelope with no speech, acknowledging a session-ended request.
    pub fn empty() -> Self {
        Self {
            version: VERSION,
            session_attributes: serde_json::Map::new(),
            response: None,
        }
    }
}

/// The speech/card/reprompt body of a response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

/// Plain-text speech output.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Null on the wire when there is no reprompt text.
    pub text: Option<String>,
}

/// Simple card mirroring the spoken text.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub content: String,
}

/// Reprompt wrapper around plain-text speech.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}
