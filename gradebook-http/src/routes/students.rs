use crate::handlers::{get_student, list_students, register_student, update_scores};
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Create the student routes with state
pub fn routes() -> Router<AppState> {
    Router::new().nest("/students", student_routes())
}

fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(register_student))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}/scores", put(update_scores))
}
