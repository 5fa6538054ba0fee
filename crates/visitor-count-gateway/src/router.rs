//! Axum router wiring.
//!
//! No routes are registered: the counter handler is the fallback, so any
//! method on any path increments.

use axum::Router;

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(transport::http::count_visit)
        .with_state(state)
}
