use crate::handlers::{students, system};
use crate::models::{
    ErrorResponse, EvaluateRequest, ListStudentsResponse, RegisterStudentRequest,
    UpdateScoresRequest,
};
use gradebook_core::{EvaluationResult, Qualification, StudentRecord};

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        system::health_check,
        students::evaluate_student,
        students::get_student,
        students::list_students,
        students::register_student,
        students::update_scores
    ),
    components(schemas(
        EvaluateRequest,
        EvaluationResult,
        Qualification,
        StudentRecord,
        RegisterStudentRequest,
        UpdateScoresRequest,
        ListStudentsResponse,
        ErrorResponse
    )),
    tags(
        (name = "gradebook", description = "Student grade evaluation API")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    )
)]
pub struct ApiDoc;
