//! Student score records.
//!
//! A [`StudentRecord`] is owned by the record store. The evaluator only reads
//! it; registration and score updates validate it with [`StudentRecord::validate`]
//! and [`Scores::validate`] before it reaches the store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{GradeError, GradeResult};

/// Lowest accepted subject score
pub const MIN_SCORE: f64 = 0.0;

/// Highest accepted subject score
pub const MAX_SCORE: f64 = 20.0;

/// Scores of one student, keyed by a unique identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentRecord {
    /// Unique student identifier
    pub student_id: String,

    /// Mathematics score
    pub math: f64,

    /// Physics score
    pub physics: f64,

    /// Informatics score
    pub informatics: f64,
}

/// The three subject scores without an identifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scores {
    pub math: f64,
    pub physics: f64,
    pub informatics: f64,
}

impl StudentRecord {
    pub fn new(student_id: impl Into<String>, math: f64, physics: f64, informatics: f64) -> Self {
        Self {
            student_id: student_id.into(),
            math,
            physics,
            informatics,
        }
    }

    pub fn scores(&self) -> Scores {
        Scores {
            math: self.math,
            physics: self.physics,
            informatics: self.informatics,
        }
    }

    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.math = scores.math;
        self.physics = scores.physics;
        self.informatics = scores.informatics;
        self
    }

    /// Check the identifier and every score before the record is stored
    pub fn validate(&self) -> GradeResult<()> {
        validate_student_id(&self.student_id)?;
        self.scores().validate()
    }
}

impl Scores {
    pub fn new(math: f64, physics: f64, informatics: f64) -> Self {
        Self {
            math,
            physics,
            informatics,
        }
    }

    /// Every score must be finite and inside `[MIN_SCORE, MAX_SCORE]`
    pub fn validate(&self) -> GradeResult<()> {
        for (field, value) in [
            ("math", self.math),
            ("physics", self.physics),
            ("informatics", self.informatics),
        ] {
            if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(GradeError::validation(format!(
                    "{field} must be between {MIN_SCORE} and {MAX_SCORE}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_student_id(student_id: &str) -> GradeResult<()> {
    if student_id.trim().is_empty() {
        return Err(GradeError::validation("student_id must not be empty"));
    }
    Ok(())
}
