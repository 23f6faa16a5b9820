//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Body for `POST /lookup`.
#[derive(Debug, Deserialize)]
pub struct LookupFormRequest {
    /// Raw postcode text; trimming happens in the controller.
    pub postcode: String,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
