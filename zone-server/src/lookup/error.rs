//! Zone lookup error types.

/// Errors from the zone-lookup client.
///
/// `user_message` flattens these into the single plain-text string shown
/// in the error box; the variants keep the detail for logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not parseable as JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Service responded with a non-success status code
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("(no message)"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Service answered 2xx but flagged the lookup as failed
    #[error("lookup rejected: {}", .message.as_deref().unwrap_or("(no message)"))]
    Rejected { message: Option<String> },

    /// Envelope claimed success but carried no zone payload
    #[error("success response missing zone data")]
    MissingData { message: Option<String> },
}

impl LookupError {
    /// The plain-text message displayed to the user.
    ///
    /// Fallback strings match the original frontend: transport-level
    /// failures collapse to "Unexpected error", an HTTP-level failure
    /// without an envelope message to "Unable to fetch zone information",
    /// and an envelope-level failure without a message to "Lookup failed".
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Http(_) | LookupError::Json { .. } => "Unexpected error".to_string(),
            LookupError::Api { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Unable to fetch zone information".to_string()),
            LookupError::Rejected { message } | LookupError::MissingData { message } => message
                .clone()
                .unwrap_or_else(|| "Lookup failed".to_string()),
        }
    }
}
