//! HTTP API module for the HR Dashboard.
//!
//! This module serves the prepared chart data as JSON to whatever renders
//! the dashboard. It is read-only: every endpoint derives its response from
//! the immutable dataset held in [`AppState`].

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
