use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Student not found: {student_id}")]
    NotFound { student_id: String },

    #[error("Student already exists: {student_id}")]
    Conflict { student_id: String },

    #[error("Store error: {0}")]
    Store(StoreError),
}

pub type GradeResult<T> = Result<T, GradeError>;

impl GradeError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        GradeError::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(student_id: S) -> Self {
        GradeError::NotFound {
            student_id: student_id.into(),
        }
    }
}

impl From<StoreError> for GradeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(student_id) => GradeError::Conflict { student_id },
            StoreError::NotFound(student_id) => GradeError::NotFound { student_id },
            other => GradeError::Store(other),
        }
    }
}
