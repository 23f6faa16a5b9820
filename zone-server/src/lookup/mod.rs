//! Zone lookup API client.
//!
//! Talks to the remote zone-lookup service: one POST per postcode,
//! returning either the zone payload or a typed error.

mod client;
mod error;
pub mod mock;
mod types;

pub use client::{LookupClient, LookupConfig};
pub use error::LookupError;
pub use types::{FareInfo, LookupRequest, LookupResponse, ZoneLookup, ZoneResult};

use std::future::Future;

/// Seam between the presentation controller and the lookup client.
///
/// Implemented by [`LookupClient`] and by [`mock::MockZoneClient`] for
/// tests and development without a running backend.
pub trait LookupService {
    /// Look up the zone for a postcode.
    ///
    /// The postcode must already be trimmed and non-empty; the controller
    /// owns that normalization.
    fn lookup(
        &self,
        postcode: &str,
    ) -> impl Future<Output = Result<ZoneLookup, LookupError>> + Send;
}
