pub mod students;
pub mod swagger;

use crate::handlers;
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use swagger::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(handlers::health_check))
        .route("/api/student", post(handlers::evaluate_student))
        .nest("/api/v1", api_v1_router())
}

/// Create the v1 API router with state
fn api_v1_router() -> Router<AppState> {
    Router::new().merge(students::routes())
}
