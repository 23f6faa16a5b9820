//! Wire types for the zone-lookup service.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/zones/lookup`.
#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    /// Free-form postcode text, trimmed before dispatch.
    pub postcode: String,
}

/// Response envelope from the zone-lookup service.
///
/// `data` is present iff `success` is true; `message` is populated on
/// failure and may be absent on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,

    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Zone payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ZoneResult>,

    /// Server-side epoch milliseconds.
    pub timestamp: i64,
}

/// Zone information for a postcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResult {
    pub postcode: String,

    /// Display label, e.g. "Zone 1".
    pub zone: String,

    pub zone_number: i32,

    /// Area name, e.g. "Westminster".
    pub area: Option<String>,

    pub latitude: f64,

    pub longitude: f64,

    pub distance_from_centre_km: f64,

    pub fare_info: Option<FareInfo>,
}

/// Peak/off-peak fares for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareInfo {
    pub peak_fare: Option<f64>,
    pub off_peak_fare: Option<f64>,
    /// ISO currency code, e.g. "GBP".
    pub currency: Option<String>,
}

/// A successful lookup: the zone payload plus the server's response timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneLookup {
    pub result: ZoneResult,
    /// Epoch milliseconds from the response envelope.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_postcode_field() {
        let req = LookupRequest {
            postcode: "SW1A 1AA".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"postcode":"SW1A 1AA"}"#);
    }

    #[test]
    fn parse_success_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "postcode": "SW1A 1AA",
                "zone": "Zone 1",
                "zoneNumber": 1,
                "area": "Westminster",
                "latitude": 51.5014,
                "longitude": -0.1419,
                "distanceFromCentreKm": 0.0,
                "fareInfo": {
                    "peakFare": 2.8,
                    "offPeakFare": 2.7,
                    "currency": "GBP"
                }
            },
            "timestamp": 1722945600000
        }"#;

        let envelope: LookupResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.timestamp, 1722945600000);

        let result = envelope.data.unwrap();
        assert_eq!(result.postcode, "SW1A 1AA");
        assert_eq!(result.zone, "Zone 1");
        assert_eq!(result.zone_number, 1);
        assert_eq!(result.area.as_deref(), Some("Westminster"));
        assert_eq!(result.latitude, 51.5014);
        assert_eq!(result.longitude, -0.1419);
        assert_eq!(result.distance_from_centre_km, 0.0);

        let fares = result.fare_info.unwrap();
        assert_eq!(fares.peak_fare, Some(2.8));
        assert_eq!(fares.off_peak_fare, Some(2.7));
        assert_eq!(fares.currency.as_deref(), Some("GBP"));
    }

    #[test]
    fn parse_failure_envelope_without_data() {
        let json = r#"{
            "success": false,
            "message": "Postcode not found: ZZ99 9ZZ",
            "timestamp": 1722945600000
        }"#;

        let envelope: LookupResponse = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Postcode not found: ZZ99 9ZZ"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "success": true,
            "data": {
                "postcode": "E20 1EJ",
                "zone": "Zone 3",
                "zoneNumber": 3,
                "area": null,
                "latitude": 51.5386,
                "longitude": -0.0166,
                "distanceFromCentreKm": 9.7,
                "fareInfo": null
            },
            "timestamp": 0
        }"#;

        let envelope: LookupResponse = serde_json::from_str(json).unwrap();
        let result = envelope.data.unwrap();
        assert_eq!(result.area, None);
        assert_eq!(result.fare_info, None);
    }

    #[test]
    fn partial_fare_info() {
        let json = r#"{"peakFare": 3.5}"#;
        let fares: FareInfo = serde_json::from_str(json).unwrap();
        assert_eq!(fares.peak_fare, Some(3.5));
        assert_eq!(fares.off_peak_fare, None);
        assert_eq!(fares.currency, None);
    }
}
