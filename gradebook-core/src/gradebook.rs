use std::sync::Arc;
use tracing::info;

use crate::error::GradeResult;
use crate::evaluator::Evaluator;
use crate::record::{Scores, StudentRecord, validate_student_id};
use crate::store::StudentStore;

/// Record management over a shared store
///
/// Holds the single store handle of the application. Evaluators handed out by
/// [`Gradebook::evaluator`] read from the same store.
#[derive(Clone)]
pub struct Gradebook {
    store: Arc<dyn StudentStore>,
}

impl Gradebook {
    pub fn new<S: StudentStore + 'static>(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn StudentStore> {
        Arc::clone(&self.store)
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.store())
    }

    /// Validate and store a new record
    pub async fn register(&self, record: StudentRecord) -> GradeResult<StudentRecord> {
        record.validate()?;
        self.store.insert(record.clone()).await?;
        info!(student_id = %record.student_id, "Registered student");
        Ok(record)
    }

    /// Validate and replace the scores of an existing record
    pub async fn update_scores(
        &self,
        student_id: &str,
        scores: Scores,
    ) -> GradeResult<StudentRecord> {
        validate_student_id(student_id)?;
        scores.validate()?;
        let record = self.store.update_scores(student_id, scores).await?;
        info!(student_id, "Updated student scores");
        Ok(record)
    }

    pub async fn list(&self) -> GradeResult<Vec<StudentRecord>> {
        Ok(self.store.list().await?)
    }

    pub async fn is_available(&self) -> bool {
        self.store.is_available().await
    }
}
