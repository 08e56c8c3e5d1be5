//! NexTrip HTTP client.
//!
//! Provides async access to the Metro Transit NexTrip real-time departures
//! API for the Green Line (route 902). One request fetches the upcoming
//! departures for one stop in one direction; there is no pagination and no
//! client-side filtering.

use tracing::debug;

use crate::directory::{Direction, StopCode};

use super::error::NexTripError;
use super::types::Departure;

/// Default base URL for Green Line NexTrip departures.
const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org/nextrip/902";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the NexTrip client.
#[derive(Debug, Clone)]
pub struct NexTripConfig {
    /// Base URL for the API (defaults to production NexTrip, route 902)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NexTripConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NexTripConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// NexTrip API client.
///
/// A timed-out or failed request surfaces as `NexTripError::Http`; the
/// request is not retried.
#[derive(Debug, Clone)]
pub struct NexTripClient {
    http: reqwest::Client,
    base_url: String,
}

impl NexTripClient {
    /// Create a new NexTrip client with the given configuration.
    pub fn new(config: NexTripConfig) -> Result<Self, NexTripError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the upcoming departures for one stop in one direction.
    ///
    /// The direction code and stop code are path segments; `format=json`
    /// selects the JSON response. The returned list is upstream-ordered,
    /// soonest first, and may be empty.
    pub async fn departures(
        &self,
        direction: Direction,
        stop: StopCode,
    ) -> Result<Vec<Departure>, NexTripError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            direction.path_code(),
            stop.as_str()
        );

        debug!(%url, "fetching departures");

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NexTripError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| NexTripError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
