//! Journey-planning HTTP client.
//!
//! Provides async methods for stop lookup and journey search against a
//! `transport.rest` instance. Calls are made one at a time and never
//! retried.

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::{Instant, Journey, StopId};
use crate::planner::TransportApi;

use super::convert::{convert_journeys, first_stop_id};
use super::error::TransportError;
use super::types::{JourneysResponse, LocationDto};

/// Default base URL for the journey-planning API.
const DEFAULT_BASE_URL: &str = "https://v6.db.transport.rest";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the journey-planning client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for the API (defaults to the public DB instance)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransportConfig {
    /// Create a config pointing at the public API.
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

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of a journey search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyQuery {
    /// Origin stop
    pub from: StopId,
    /// Destination stop
    pub to: StopId,
    /// Earliest departure
    pub departure: Instant,
    /// Maximum number of journeys to return
    pub results: u8,
}

impl JourneyQuery {
    /// Query string pairs for `GET /journeys`. Only bus journeys are requested.
    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("from", self.from.to_string()),
            ("to", self.to.to_string()),
            ("departure", self.departure.format("%Y-%m-%dT%H:%M%:z").to_string()),
            ("results", self.results.to_string()),
            ("remarks", "true".to_string()),
            ("polylines", "false".to_string()),
            ("tickets", "false".to_string()),
            ("products[bus]", "true".to_string()),
        ]
    }
}

/// Journey-planning API client.
#[derive(Debug, Clone)]
pub struct TransportClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransportClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a stop name to its id, taking the best match.
    ///
    /// # Errors
    ///
    /// Returns `StopNotFound` if the search yields nothing usable.
    pub async fn find_stop(&self, name: &str) -> Result<StopId, TransportError> {
        let url = format!("{}/locations", self.base_url);
        let locations: Vec<LocationDto> = self
            .get_json(&url, &[("query", name.to_string()), ("results", "1".to_string())])
            .await?;

        let id = first_stop_id(&locations).ok_or_else(|| TransportError::StopNotFound {
            query: name.to_string(),
        })?;

        debug!(name, id = %id, "resolved stop");
        Ok(id)
    }

    /// Search bus journeys between two stops.
    ///
    /// A response without journeys yields an empty list.
    pub async fn journeys(&self, query: &JourneyQuery) -> Result<Vec<Journey>, TransportError> {
        let url = format!("{}/journeys", self.base_url);
        let response: JourneysResponse = self.get_json(&url, &query.params()).await?;

        let journeys = convert_journeys(&response)?;
        info!(
            from = %query.from,
            to = %query.to,
            count = journeys.len(),
            "fetched journeys"
        );
        Ok(journeys)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        debug!(url, "GET");
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TransportError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TransportApi for TransportClient {
    async fn resolve_stop(&self, name: &str) -> Result<StopId, TransportError> {
        self.find_stop(name).await
    }

    async fn fetch_journeys(&self, query: &JourneyQuery) -> Result<Vec<Journey>, TransportError> {
        self.journeys(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_instant;

    #[test]
    fn config_builder() {
        let config = TransportConfig::new()
            .with_base_url("http://localhost:3000")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = TransportConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn client_creation_trims_trailing_slash() {
        let config = TransportConfig::new().with_base_url("http://localhost:3000/");
        let client = TransportClient::new(config).unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn journey_query_params() {
        let query = JourneyQuery {
            from: StopId::parse("8003482").unwrap(),
            to: StopId::parse("8003910").unwrap(),
            departure: parse_instant("2024-03-15T09:12:30+01:00").unwrap(),
            results: 5,
        };

        let params = query.params();
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("from"), Some("8003482"));
        assert_eq!(get("to"), Some("8003910"));
        assert_eq!(get("departure"), Some("2024-03-15T09:12+01:00"));
        assert_eq!(get("results"), Some("5"));
        assert_eq!(get("remarks"), Some("true"));
        assert_eq!(get("polylines"), Some("false"));
        assert_eq!(get("tickets"), Some("false"));
        assert_eq!(get("products[bus]"), Some("true"));
    }

    // Requests against the live API are not made from unit tests; the
    // pipeline is exercised through an in-memory `TransportApi` instead.
}
