//! Spoken response composition.
//!
//! Turns a two-direction departure board into the fixed sentence pair the
//! skill speaks, and supplies the canned responses for the other intents.
//! The wording here is part of the skill's contract; change it only
//! deliberately.

use crate::board::NextDepartures;
use crate::directory::Direction;
use crate::nextrip::Departure;

use super::response::SpeechResponse;

/// Standard reprompt asking for a station.
const STATION_REPROMPT: &str = "Please tell me the name of a green line station.";

/// Title prefix for query responses.
const TITLE_PREFIX: &str = "Train Times - ";

/// Greeting for launch and help.
pub fn welcome() -> SpeechResponse {
    SpeechResponse {
        title: "Metro".to_string(),
        speech: "Ask Me which station you would like the train times for.".to_string(),
        reprompt: Some(STATION_REPROMPT.to_string()),
        end_session: false,
    }
}

/// Farewell for stop and cancel.
pub fn farewell() -> SpeechResponse {
    SpeechResponse {
        title: "Metro Session Ended".to_string(),
        speech: "Thank You for using Metro".to_string(),
        reprompt: None,
        end_session: true,
    }
}

/// Response for a missing or unrecognized station phrase.
///
/// Recoverable: the session stays open and the user is reprompted.
pub fn unknown_station() -> SpeechResponse {
    SpeechResponse {
        title: TITLE_PREFIX.to_string(),
        speech: "I don't recognize that station. Please try again.".to_string(),
        reprompt: Some(STATION_REPROMPT.to_string()),
        end_session: false,
    }
}

/// Response when one or both directions have no upcoming departures.
pub fn no_departures(phrase: &str) -> SpeechResponse {
    SpeechResponse {
        title: format!("{TITLE_PREFIX}{phrase}"),
        speech: format!(
            "There are no upcoming trains for the {phrase} Station right now. Please try again later."
        ),
        reprompt: None,
        end_session: true,
    }
}

/// Apology when the upstream API is unreachable or returns garbage.
pub fn upstream_trouble(phrase: &str) -> SpeechResponse {
    SpeechResponse {
        title: format!("{TITLE_PREFIX}{phrase}"),
        speech: "Sorry, I'm having trouble reaching Metro Transit right now. Please try again later."
            .to_string(),
        reprompt: None,
        end_session: true,
    }
}

/// The answer to a successful station query.
///
/// The title carries the phrase as the user spoke it, not the canonical
/// station name. Successful answers close the session.
pub fn train_times(phrase: &str, board: &NextDepartures) -> SpeechResponse {
    let speech = format!(
        "{} {}",
        direction_sentence(Direction::East, phrase, &board.east),
        direction_sentence(Direction::West, phrase, &board.west),
    );

    SpeechResponse {
        title: format!("{TITLE_PREFIX}{phrase}"),
        speech,
        reprompt: None,
        end_session: true,
    }
}

/// One direction's sentence: the next one or two departures.
fn direction_sentence(direction: Direction, phrase: &str, board: &[Departure]) -> String {
    let times: Vec<String> = board
        .iter()
        .map(|d| departure_phrase(&d.departure_text))
        .collect();

    format!(
        "The Next {} trains for the {} Station is {}.",
        direction.label(),
        phrase,
        times.join(" and "),
    )
}

/// Render one departure's raw text as a spoken time phrase.
///
/// Countdown text contains "min" and becomes "in {n} minutes"; anything
/// else is treated as a clock time and becomes "at {time}". Only the first
/// "min" is expanded, matching how the countdown text is written.
fn departure_phrase(text: &str) -> String {
    let text = text.to_lowercase();
    if text.contains("min") {
        format!("in {}", text.replacen("min", "minutes", 1))
    } else {
        format!("at {text}")
    }
}
