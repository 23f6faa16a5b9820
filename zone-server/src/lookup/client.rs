//! Zone lookup HTTP client.
//!
//! One `POST /api/zones/lookup` per call, no retries, no caching.

use super::error::LookupError;
use super::types::{LookupRequest, LookupResponse, ZoneLookup};
use super::LookupService;

/// Default base URL for the zone-lookup service.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for the lookup client.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL for the zone-lookup service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LookupConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
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

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the zone-lookup service.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    /// Create a new lookup client with the given configuration.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up the zone for a postcode.
    ///
    /// Sends exactly one request with the postcode as the sole payload
    /// field. Any non-2xx status is a failure regardless of body content;
    /// the envelope is still parsed on failure to salvage its `message`.
    pub async fn lookup(&self, postcode: &str) -> Result<ZoneLookup, LookupError> {
        let url = format!("{}/api/zones/lookup", self.base_url);

        let request = LookupRequest {
            postcode: postcode.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<LookupResponse>(&body)
                .ok()
                .and_then(|envelope| envelope.message);
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: LookupResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        tracing::debug!(
            success = envelope.success,
            timestamp = envelope.timestamp,
            "zone lookup response"
        );

        Self::unpack(envelope)
    }

    /// Apply the envelope invariant: `data` is present iff `success` is true.
    fn unpack(envelope: LookupResponse) -> Result<ZoneLookup, LookupError> {
        if !envelope.success {
            return Err(LookupError::Rejected {
                message: envelope.message,
            });
        }

        match envelope.data {
            Some(result) => Ok(ZoneLookup {
                result,
                timestamp: envelope.timestamp,
            }),
            None => Err(LookupError::MissingData {
                message: envelope.message,
            }),
        }
    }
}

impl LookupService for LookupClient {
    async fn lookup(&self, postcode: &str) -> Result<ZoneLookup, LookupError> {
        LookupClient::lookup(self, postcode).await
    }
}
