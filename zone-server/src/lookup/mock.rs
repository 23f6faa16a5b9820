//! Mock zone-lookup client for testing without a running backend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::LookupError;
use super::types::{ZoneLookup, ZoneResult};
use super::LookupService;

/// Timestamp stamped onto every mock response.
const MOCK_TIMESTAMP: i64 = 1_722_945_600_000;

/// Mock client backed by an in-memory postcode table.
///
/// Unknown postcodes answer the way the real service does: a rejected
/// envelope with a "not found" message. Every call is recorded so tests
/// can assert on request counts and payloads.
#[derive(Clone, Default)]
pub struct MockZoneClient {
    results: Arc<RwLock<HashMap<String, ZoneResult>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockZoneClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zone result, keyed by its postcode.
    pub async fn insert(&self, result: ZoneResult) {
        let mut results = self.results.write().await;
        results.insert(result.postcode.clone(), result);
    }

    /// Postcodes the client has been asked about, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

impl LookupService for MockZoneClient {
    async fn lookup(&self, postcode: &str) -> Result<ZoneLookup, LookupError> {
        self.calls.write().await.push(postcode.to_string());

        let results = self.results.read().await;
        match results.get(postcode) {
            Some(result) => Ok(ZoneLookup {
                result: result.clone(),
                timestamp: MOCK_TIMESTAMP,
            }),
            None => Err(LookupError::Rejected {
                message: Some(format!("Postcode not found: {postcode}")),
            }),
        }
    }
}

/// A zone result for tests.
pub fn sample_result(postcode: &str, zone_number: i32) -> ZoneResult {
    ZoneResult {
        postcode: postcode.to_string(),
        zone: format!("Zone {zone_number}"),
        zone_number,
        area: Some("Westminster".to_string()),
        latitude: 51.5014,
        longitude: -0.1419,
        distance_from_centre_km: 0.0,
        fare_info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_postcode_returns_result() {
        let client = MockZoneClient::new();
        client.insert(sample_result("SW1A 1AA", 1)).await;

        let lookup = client.lookup("SW1A 1AA").await.unwrap();
        assert_eq!(lookup.result.postcode, "SW1A 1AA");
        assert_eq!(lookup.result.zone, "Zone 1");
        assert_eq!(lookup.timestamp, MOCK_TIMESTAMP);
    }

    #[tokio::test]
    async fn unknown_postcode_is_rejected() {
        let client = MockZoneClient::new();

        let err = client.lookup("ZZ99 9ZZ").await.unwrap_err();
        match err {
            LookupError::Rejected { message } => {
                assert_eq!(message.as_deref(), Some("Postcode not found: ZZ99 9ZZ"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn calls_are_recorded() {
        let client = MockZoneClient::new();
        client.insert(sample_result("N1 9GU", 2)).await;

        let _ = client.lookup("N1 9GU").await;
        let _ = client.lookup("ZZ99 9ZZ").await;

        assert_eq!(client.calls().await, vec!["N1 9GU", "ZZ99 9ZZ"]);
    }
}
