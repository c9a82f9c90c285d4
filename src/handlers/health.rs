use axum::{extract::State, http::StatusCode, response::Response};

use super::page;
use crate::{state::AppState, templates::error_page};

/// Liveness probe that also checks the database connection.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.db.ping().await {
        Ok(()) => page(StatusCode::OK, maud::html! { "ok" }),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            let status = StatusCode::SERVICE_UNAVAILABLE;
            page(status, error_page(status, "Database unavailable"))
        }
    }
}
