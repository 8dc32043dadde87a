use crate::server::AppState;
use axum::{extract::State, http::StatusCode};

/// Health check
///
/// Reports whether the record store can serve requests.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Record store available"),
        (status = 503, description = "Record store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn health_check(State(state): State<AppState>) -> StatusCode {
    if state.gradebook.is_available().await {
        StatusCode::OK
    } else {
        tracing::warn!("Health check failed: record store unavailable");
        StatusCode::SERVICE_UNAVAILABLE
    }
}
