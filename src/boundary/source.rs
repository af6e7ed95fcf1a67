use std::{thread, time::Duration};

use rand::Rng;
use reqwest::{StatusCode, blocking::Client};

use crate::error::DashboardError;
use super::BoundaryCollection;

/// Public GeoJSON of Indian state boundaries, one feature per state.
pub const DEFAULT_BOUNDARY_URL: &str = "https://raw.githubusercontent.com/geohacker/india/master/state/india_state.geojson";

/// Feature property holding the state name.
pub const DEFAULT_NAME_PROPERTY: &str = "NAME_1";

/// Somewhere boundary data can be loaded from.
pub trait BoundarySource: Send + Sync {
    /// Load the boundary collection. Called at most once per successful load.
    fn fetch(&self) -> Result<BoundaryCollection, DashboardError>;

    /// Where the data comes from, for logs.
    fn location(&self) -> &str;
}

/// Backoff schedule for transient fetch failures.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    /// Fraction of the delay added or removed at random.
    pub jitter: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(4),
            jitter: 0.2,
        }
    }
}

impl RetryPolicy {
    /// Exponential delay before retry number `attempt` (0-based), capped and jittered.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_secs_f64() * 2f64.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_secs_f64());
        let spread = capped * self.jitter;
        let jitter = if spread > 0.0 { rand::rng().random_range(-spread..=spread) } else { 0.0 };
        Duration::from_secs_f64((capped + jitter).max(0.0))
    }
}

/// Statuses worth another attempt.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

struct AttemptError {
    reason: String,
    retryable: bool,
}

/// Blocking HTTP GET of a GeoJSON document.
pub struct HttpBoundarySource {
    client: Client,
    url: String,
    name_property: String,
    retry: RetryPolicy,
}

impl HttpBoundarySource {
    pub fn new(url: impl Into<String>, name_property: impl Into<String>, timeout: Duration, retry: RetryPolicy) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("workforce-atlas/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, url: url.into(), name_property: name_property.into(), retry })
    }

    fn attempt(&self) -> Result<BoundaryCollection, AttemptError> {
        let response = self.client.get(&self.url).send()
            .map_err(|err| AttemptError {
                retryable: err.is_timeout() || err.is_connect() || err.is_request(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AttemptError { reason: format!("HTTP {status}"), retryable: is_retryable_status(status) });
        }

        let body = response.bytes()
            .map_err(|err| AttemptError { reason: format!("reading body: {err}"), retryable: true })?;

        BoundaryCollection::from_geojson(&body, &self.name_property)
            .map_err(|err| AttemptError { reason: format!("invalid GeoJSON: {err:#}"), retryable: false })
    }
}

impl BoundarySource for HttpBoundarySource {
    fn fetch(&self) -> Result<BoundaryCollection, DashboardError> {
        let mut attempt = 0;
        loop {
            tracing::info!(url = %self.url, attempt = attempt + 1, "[boundary] fetching state boundaries");
            match self.attempt() {
                Ok(collection) => {
                    tracing::info!(features = collection.len(), "[boundary] fetched state boundaries");
                    return Ok(collection);
                }
                Err(err) if err.retryable && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(reason = %err.reason, ?delay, "[boundary] fetch failed, retrying");
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!(reason = %err.reason, "[boundary] fetch failed");
                    return Err(DashboardError::Fetch { url: self.url.clone(), reason: err.reason });
                }
            }
        }
    }

    fn location(&self) -> &str { &self.url }
}
