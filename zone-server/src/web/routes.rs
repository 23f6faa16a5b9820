//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Form, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::lookup::LookupError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/lookup", post(lookup))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page: search form plus whatever the controller currently shows.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let view = StateView::from(state.controller.view().await);
    Html(
        IndexTemplate { state: view }
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Submit a postcode lookup.
///
/// Returns the outcome fragment when the request accepts HTML, JSON
/// otherwise. An empty postcode makes no upstream request: the HTML
/// surface re-renders the unchanged state, the JSON surface answers 400.
async fn lookup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(req): Form<LookupFormRequest>,
) -> Result<Response, AppError> {
    tracing::info!(postcode = %req.postcode, "zone lookup requested");

    let outcome = state.controller.submit(&req.postcode).await;

    if accepts_html(&headers) {
        let view = match outcome {
            None => StateView::from(state.controller.view().await),
            Some(Ok(lookup)) => StateView::Success(ZoneView::from_lookup(&lookup)),
            Some(Err(e)) => StateView::Error(e.user_message()),
        };
        let html = OutcomeTemplate { state: view }
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;

        Ok(Html(html).into_response())
    } else {
        match outcome {
            None => Err(AppError::BadRequest {
                message: "postcode must not be empty".to_string(),
            }),
            Some(Ok(lookup)) => Ok(Json(lookup.result).into_response()),
            Some(Err(e)) => Err(AppError::from(e)),
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::Upstream {
            message: e.user_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
