//! Presentation controller.
//!
//! Owns the single view state for the page and sequences one lookup per
//! submission. The state is a tagged variant, so "result and error at the
//! same time" is unrepresentable.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::lookup::{LookupError, LookupService, ZoneLookup};

/// The page's view state. Exactly one of these holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing submitted yet.
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The most recent lookup succeeded.
    Success(ZoneLookup),
    /// The most recent lookup failed; holds the display message.
    Error(String),
}

struct Inner {
    state: ViewState,
    /// Sequence number of the most recent submission.
    latest: u64,
}

/// Sequences lookups and publishes their outcomes into the view state.
///
/// Overlapping submissions both proceed, but only the most recently
/// submitted one may publish its outcome: a response arriving for a
/// superseded submission is discarded, so the displayed state is
/// deterministically last-submitted-wins. The in-flight request itself
/// is not cancelled, and each caller still gets its own outcome back.
#[derive(Clone)]
pub struct LookupController<C> {
    service: C,
    inner: Arc<RwLock<Inner>>,
}

impl<C: LookupService> LookupController<C> {
    /// Create a controller in the idle state.
    pub fn new(service: C) -> Self {
        Self {
            service,
            inner: Arc::new(RwLock::new(Inner {
                state: ViewState::Idle,
                latest: 0,
            })),
        }
    }

    /// Snapshot of the current view state.
    pub async fn view(&self) -> ViewState {
        self.inner.read().await.state.clone()
    }

    /// Submit a postcode for lookup.
    ///
    /// Empty or whitespace-only input is ignored: no request is sent and
    /// the view state is untouched (`None`). Otherwise the trimmed
    /// postcode is dispatched and this submission's own outcome is
    /// returned, whether or not it was still current enough to publish.
    pub async fn submit(&self, raw: &str) -> Option<Result<ZoneLookup, LookupError>> {
        let postcode = normalize(raw)?;

        let seq = {
            let mut inner = self.inner.write().await;
            inner.latest += 1;
            inner.state = ViewState::Loading;
            inner.latest
        };

        let outcome = self.service.lookup(postcode).await;

        let mut inner = self.inner.write().await;
        if inner.latest == seq {
            inner.state = match &outcome {
                Ok(lookup) => ViewState::Success(lookup.clone()),
                Err(e) => ViewState::Error(e.user_message()),
            };
        } else {
            tracing::debug!(postcode, seq, "discarding superseded lookup outcome");
        }

        Some(outcome)
    }
}

/// Trim the input; `None` if nothing is left.
fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
