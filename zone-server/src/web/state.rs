//! Application state for the web layer.

use crate::controller::LookupController;
use crate::lookup::LookupClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Presentation controller over the real lookup client.
    pub controller: LookupController<LookupClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(controller: LookupController<LookupClient>) -> Self {
        Self { controller }
    }
}
