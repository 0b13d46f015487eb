//! The Odds API v4 REST client.
//!
//! Two endpoints are used:
//! - `GET /sports/{sport}/odds` lists upcoming events (with head-to-head
//!   prices only, which are discarded in favour of the per-event call)
//! - `GET /sports/{sport}/events/{id}/odds` returns one event with every
//!   requested market from every bookmaker in the configured regions
//!
//! Prices are always requested in American format.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::EventDto;
use super::settings::{OddsApiConfig, API_KEY_ENV};
use crate::domain::{Event, EventId, SportKey};
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::provider::OddsProvider;

const ODDS_FORMAT: &str = "american";

/// Longest error body kept in [`Error::Provider`].
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for The Odds API.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    regions: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl OddsApiClient {
    /// Create a client with default HTTP settings and a single attempt per call.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            regions: "us".into(),
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    /// Build a client from the `[provider]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no API key was resolved.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &OddsApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ConfigError::MissingApiKey { env: API_KEY_ENV })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            api_key,
            regions: config.regions.clone(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        })
    }

    /// Build an endpoint URL. `segments` are appended to the base path.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(self.base_url.trim_end_matches('/'))?;
        url.path_segments_mut()
            .map_err(|()| Error::Parse(format!("base URL cannot have a path: {}", self.base_url)))?
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("apiKey", &self.api_key)
            .append_pair("regions", &self.regions)
            .extend_pairs(query);
        Ok(url)
    }

    async fn get_with_retry<T>(&self, url: Url) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            if let Some(remaining) = response
                .headers()
                .get("x-requests-remaining")
                .and_then(|v| v.to_str().ok())
            {
                debug!(remaining, "Odds API quota");
            }

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Provider {
                    status: status.as_u16(),
                    body: truncate(&body, MAX_ERROR_BODY),
                });
            }

            match response.json::<T>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    /// Fetch upcoming events for a sport.
    pub async fn get_events(&self, sport: &SportKey) -> Result<Vec<EventDto>> {
        let url = self.endpoint(&["sports", sport.as_str(), "odds", ""], &[])?;

        info!(sport = %sport, "Fetching events");

        let events: Vec<EventDto> = self.get_with_retry(url).await?;
        debug!(sport = %sport, count = events.len(), "Fetched events");

        Ok(events)
    }

    /// Fetch the requested markets for one event.
    pub async fn get_event_odds(
        &self,
        sport: &SportKey,
        event_id: &EventId,
        markets: &[String],
    ) -> Result<EventDto> {
        let markets = markets.join(",");
        let url = self.endpoint(
            &["sports", sport.as_str(), "events", event_id.as_str(), "odds"],
            &[("markets", markets.as_str()), ("oddsFormat", ODDS_FORMAT)],
        )?;

        debug!(sport = %sport, event = %event_id, "Fetching event odds");

        let event: EventDto = self.get_with_retry(url).await?;
        debug!(
            event = %event_id,
            bookmakers = event.bookmakers.len(),
            "Fetched event odds"
        );

        Ok(event)
    }
}

#[async_trait]
impl OddsProvider for OddsApiClient {
    async fn list_events(&self, sport: &SportKey) -> Result<Vec<Event>> {
        let events = self.get_events(sport).await?;
        Ok(events.into_iter().map(Event::from).collect())
    }

    async fn event_odds(
        &self,
        sport: &SportKey,
        event_id: &EventId,
        markets: &[String],
    ) -> Result<Event> {
        let event = self.get_event_odds(sport, event_id, markets).await?;
        Ok(event.into())
    }

    fn provider_name(&self) -> &'static str {
        "The Odds API"
    }
}

fn truncate(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
