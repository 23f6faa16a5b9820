//! Web layer for the zone finder.
//!
//! Serves the search page and proxies each submission to the
//! zone-lookup service.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
