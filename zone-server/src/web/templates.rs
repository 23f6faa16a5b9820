//! Askama templates for the web frontend.

use askama::Template;

use crate::controller::ViewState;
use crate::lookup::{FareInfo, ZoneLookup};

// ============================================================================
// Templates
// ============================================================================

/// Home page: search form, current outcome, zone info section.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub state: StateView,
}

/// Outcome fragment (result card or error box) returned to submissions.
#[derive(Template)]
#[template(path = "outcome.html")]
pub struct OutcomeTemplate {
    pub state: StateView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// View-model mirror of the controller's tagged state.
#[derive(Debug, Clone)]
pub enum StateView {
    Idle,
    Loading,
    Success(ZoneView),
    Error(String),
}

impl From<ViewState> for StateView {
    fn from(state: ViewState) -> Self {
        match state {
            ViewState::Idle => StateView::Idle,
            ViewState::Loading => StateView::Loading,
            ViewState::Success(lookup) => StateView::Success(ZoneView::from_lookup(&lookup)),
            ViewState::Error(message) => StateView::Error(message),
        }
    }
}

/// Result-card view model with display formatting applied.
#[derive(Debug, Clone)]
pub struct ZoneView {
    pub postcode: String,
    /// Zone label, shown highlighted (e.g. "Zone 1").
    pub zone: String,
    pub area: String,
    pub distance: String,
    pub latitude: String,
    pub longitude: String,
    pub fares: Option<FareView>,
    pub looked_up_at: Option<String>,
}

/// Fare rows, only rendered when the service returned fare info.
#[derive(Debug, Clone)]
pub struct FareView {
    pub peak: String,
    pub off_peak: String,
}

impl ZoneView {
    /// Create from a successful lookup.
    pub fn from_lookup(lookup: &ZoneLookup) -> Self {
        let result = &lookup.result;
        Self {
            postcode: result.postcode.clone(),
            zone: result.zone.clone(),
            area: result.area.clone().unwrap_or_else(|| "Unknown".to_string()),
            distance: format!("{} km", result.distance_from_centre_km),
            latitude: format!("{:.6}", result.latitude),
            longitude: format!("{:.6}", result.longitude),
            fares: result.fare_info.as_ref().map(FareView::from_fare_info),
            looked_up_at: format_timestamp(lookup.timestamp),
        }
    }
}

impl FareView {
    fn from_fare_info(fares: &FareInfo) -> Self {
        Self {
            peak: format_fare(fares.peak_fare),
            off_peak: format_fare(fares.off_peak_fare),
        }
    }
}

fn format_fare(amount: Option<f64>) -> String {
    match amount {
        Some(amount) => format!("£{amount:.2}"),
        None => "--".to_string(),
    }
}

/// Epoch milliseconds → "HH:MM:SS UTC". None for out-of-range values.
fn format_timestamp(millis: i64) -> Option<String> {
    let time = chrono::DateTime::from_timestamp_millis(millis)?;
    Some(time.format("%H:%M:%S UTC").to_string())
}
