use crate::error::AppError;
use crate::models::{
    ErrorResponse, EvaluateRequest, ListStudentsQuery, ListStudentsResponse, RegisterStudentRequest,
    UpdateScoresRequest,
};
use crate::server::AppState;
use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use gradebook_core::{EvaluationResult, GradeError, Qualification, StudentRecord};
use std::str::FromStr;

/// Evaluate a student
///
/// Looks the student up by the `student_id` in the body and returns the
/// averaged scores with their qualification.
#[utoipa::path(
    post,
    path = "/api/student",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Student evaluated", body = EvaluationResult),
        (status = 400, description = "Missing or malformed student_id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn evaluate_student(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, AppError> {
    let Json(request) = payload?;
    let result = state
        .gradebook
        .evaluator()
        .evaluate(&request.student_id)
        .await?;
    Ok(Json(result))
}

/// Get a student's evaluation
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}",
    responses(
        (status = 200, description = "Student evaluated", body = EvaluationResult),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    params(
        ("student_id" = String, Path, description = "Student identifier")
    )
)]
#[axum::debug_handler]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<EvaluationResult>, AppError> {
    let result = state.gradebook.evaluator().evaluate(&student_id).await?;
    Ok(Json(result))
}

/// List student evaluations
///
/// Returns every student in store order, optionally filtered by tier.
#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(ListStudentsQuery),
    responses(
        (status = 200, description = "Students listed", body = ListStudentsResponse),
        (status = 400, description = "Unknown qualification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_students(
    State(state): State<AppState>,
    query: Result<Query<ListStudentsQuery>, QueryRejection>,
) -> Result<Json<ListStudentsResponse>, AppError> {
    let Query(query) = query?;
    let filter = query
        .qualification
        .as_deref()
        .map(|label| {
            Qualification::from_str(label).map_err(|_| {
                GradeError::validation(format!("Unknown qualification: {}", label))
            })
        })
        .transpose()?;

    let students = state.gradebook.evaluator().evaluate_all(filter).await?;
    let total = students.len();
    Ok(Json(ListStudentsResponse { students, total }))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = RegisterStudentRequest,
    responses(
        (status = 201, description = "Student registered", body = StudentRecord),
        (status = 400, description = "Invalid identifier or score", body = ErrorResponse),
        (status = 409, description = "Student already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn register_student(
    State(state): State<AppState>,
    payload: Result<Json<RegisterStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentRecord>), AppError> {
    let Json(request) = payload?;
    let record = state.gradebook.register(request.into()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a student's scores
#[utoipa::path(
    put,
    path = "/api/v1/students/{student_id}/scores",
    request_body = UpdateScoresRequest,
    responses(
        (status = 200, description = "Scores updated", body = StudentRecord),
        (status = 400, description = "Invalid score", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    params(
        ("student_id" = String, Path, description = "Student identifier")
    )
)]
#[axum::debug_handler]
pub async fn update_scores(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    payload: Result<Json<UpdateScoresRequest>, JsonRejection>,
) -> Result<Json<StudentRecord>, AppError> {
    let Json(request) = payload?;
    let record = state
        .gradebook
        .update_scores(&student_id, request.into())
        .await?;
    Ok(Json(record))
}
