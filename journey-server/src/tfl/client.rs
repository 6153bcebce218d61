//! TfL Unified API HTTP client.
//!
//! Provides async methods for the four endpoints the planner uses: stop
//! point search, stop point (hub) detail, line route sequences and
//! journey results.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::domain::LineId;

use super::error::TflError;
use super::types::{
    Journey, JourneyResults, RouteSequence, StopPoint, StopPointMatch, StopPointSearchResponse,
};
use super::{Direction, JourneyQuery, TransitApi};

/// Default base URL for the TfL Unified API.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Modes the stop point search is restricted to.
const SEARCH_MODES: &str = "tube,dlr,elizabeth-line,overground";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// API key, sent as the `app_key` query parameter when non-empty
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Default request timeout in seconds
    pub timeout_secs: u64,
    /// Timeout for line route sequence requests in seconds
    pub sequence_timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 8,
            sequence_timeout_secs: 5,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the route sequence request timeout.
    pub fn with_sequence_timeout(mut self, secs: u64) -> Self {
        self.sequence_timeout_secs = secs;
        self
    }
}

/// TfL Unified API client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    sequence_timeout: Duration,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or_else(|| TflError::Api {
                status: 0,
                message: format!("Invalid base URL: {}", config.base_url),
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
            sequence_timeout: Duration::from_secs(config.sequence_timeout_secs),
        })
    }

    /// Build an endpoint URL from path segments. Segments are percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a JSON endpoint, mapping status codes to errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
        timeout: Option<Duration>,
    ) -> Result<T, TflError> {
        let mut request = self.http.get(url).query(query);
        if !self.api_key.is_empty() {
            request = request.query(&[("app_key", self.api_key.as_str())]);
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TflError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TransitApi for TflClient {
    async fn search_stop_points(&self, query: &str) -> Result<Vec<StopPointMatch>, TflError> {
        let url = self.url(&["StopPoint", "Search", query]);
        let response: StopPointSearchResponse = self
            .get_json(url, &[("modes", SEARCH_MODES.to_string())], None)
            .await?;
        Ok(response.matches)
    }

    async fn stop_point(&self, id: &str) -> Result<StopPoint, TflError> {
        let url = self.url(&["StopPoint", id]);
        self.get_json(url, &[], None).await
    }

    async fn route_sequence(
        &self,
        line: &LineId,
        direction: Direction,
    ) -> Result<RouteSequence, TflError> {
        let url = self.url(&["Line", line.as_str(), "Route", "Sequence", direction.as_str()]);
        self.get_json(url, &[], Some(self.sequence_timeout)).await
    }

    async fn journey_results(
        &self,
        from: &str,
        to: &str,
        when: &JourneyQuery,
    ) -> Result<Vec<Journey>, TflError> {
        let url = self.url(&["Journey", "JourneyResults", from, "to", to]);

        let mut query = vec![("nationalSearch", "false".to_string())];
        if let Some(date) = &when.date {
            query.push(("date", date.clone()));
        }
        if let Some(time) = &when.time {
            query.push(("time", time.clone()));
        }

        let results: JourneyResults = self.get_json(url, &query, None).await?;
        Ok(results.journeys)
    }
}
