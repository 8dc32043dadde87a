use gradebook_core::{EvaluationResult, Scores, StudentRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Evaluation request: the identifier of the student to grade
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluateRequest {
    /// Student identifier
    pub student_id: String,
}

/// Registration request for a new student record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterStudentRequest {
    /// Unique student identifier
    pub student_id: String,

    /// Mathematics score, 0 to 20
    pub math: f64,

    /// Physics score, 0 to 20
    pub physics: f64,

    /// Informatics score, 0 to 20
    pub informatics: f64,
}

impl From<RegisterStudentRequest> for StudentRecord {
    fn from(request: RegisterStudentRequest) -> Self {
        StudentRecord::new(
            request.student_id,
            request.math,
            request.physics,
            request.informatics,
        )
    }
}

/// Replacement scores for an existing student
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateScoresRequest {
    pub math: f64,
    pub physics: f64,
    pub informatics: f64,
}

impl From<UpdateScoresRequest> for Scores {
    fn from(request: UpdateScoresRequest) -> Self {
        Scores::new(request.math, request.physics, request.informatics)
    }
}

/// Query string of the student listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListStudentsQuery {
    /// Keep only one qualification tier, e.g. `Excellent` or `Very Good`
    pub qualification: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListStudentsResponse {
    pub students: Vec<EvaluationResult>,

    pub total: usize,
}

/// Error body shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
