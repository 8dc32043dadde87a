use gradebook_http::routes::create_api_router;
use gradebook_http::server::AppState;
use axum::Router;
use gradebook_core::{Gradebook, StudentRecord, store::InMemoryStore};

/// Records loaded into the test state, one per qualification tier
pub fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("S001", 20.0, 20.0, 20.0),
        StudentRecord::new("S002", 17.0, 16.5, 16.0),
        StudentRecord::new("S003", 14.0, 15.0, 14.5),
        StudentRecord::new("S004", 10.0, 10.0, 10.0),
        StudentRecord::new("S005", 0.0, 0.0, 0.0),
    ]
}

/// Create a test AppState backed by an in-memory store holding `records`
pub fn create_test_state_with(records: Vec<StudentRecord>) -> AppState {
    AppState::new(Gradebook::new(InMemoryStore::with_records(records)))
}

/// Create a test AppState seeded with [`sample_records`]
pub fn create_test_state() -> AppState {
    create_test_state_with(sample_records())
}

/// Router with all routes bound to `state`
pub fn create_test_app(state: AppState) -> Router {
    create_api_router().with_state(state)
}
