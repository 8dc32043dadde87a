//! Grade evaluation.
//!
//! The [`Evaluator`] looks a student up in the injected store, averages the
//! three subject scores and classifies the rounded average. It never writes
//! to the store.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::error::{GradeError, GradeResult};
use crate::qualification::{Qualification, average_of};
use crate::record::StudentRecord;
use crate::store::StudentStore;

/// Outcome of evaluating one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvaluationResult {
    pub student_id: String,
    pub math: f64,
    pub physics: f64,
    pub informatics: f64,

    /// Mean of the three scores, rounded half-to-even to two decimals
    pub average: f64,

    /// Tier derived from `average`
    pub qualification: Qualification,
}

impl From<&StudentRecord> for EvaluationResult {
    fn from(record: &StudentRecord) -> Self {
        let average = average_of(record.math, record.physics, record.informatics);
        Self {
            student_id: record.student_id.clone(),
            math: record.math,
            physics: record.physics,
            informatics: record.informatics,
            average,
            qualification: Qualification::from_average(average),
        }
    }
}

/// Read-only evaluator over a record store
#[derive(Clone)]
pub struct Evaluator {
    store: Arc<dyn StudentStore>,
}

impl Evaluator {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Evaluate the student identified by `student_id`.
    ///
    /// # Errors
    ///
    /// - [`GradeError::Validation`] for an empty identifier
    /// - [`GradeError::NotFound`] when no record matches
    /// - [`GradeError::Store`] when the backend fails
    ///
    /// If several records share the identifier, a data-integrity warning is
    /// logged and the first one in store order is evaluated.
    pub async fn evaluate(&self, student_id: &str) -> GradeResult<EvaluationResult> {
        if student_id.is_empty() {
            return Err(GradeError::validation("student_id must not be empty"));
        }

        let matches = self.store.find_matching(student_id).await?;
        if matches.len() > 1 {
            warn!(
                student_id,
                matches = matches.len(),
                "Data integrity: student id is not unique, using the first record"
            );
        }

        let record = matches
            .first()
            .ok_or_else(|| GradeError::not_found(student_id))?;

        let result = Self::evaluate_record(record);
        debug!(
            student_id,
            average = result.average,
            qualification = %result.qualification,
            "Evaluated student"
        );
        Ok(result)
    }

    /// Pure computation over an already loaded record
    pub fn evaluate_record(record: &StudentRecord) -> EvaluationResult {
        EvaluationResult::from(record)
    }

    /// Evaluate every record in store order, optionally keeping one tier
    pub async fn evaluate_all(
        &self,
        filter: Option<Qualification>,
    ) -> GradeResult<Vec<EvaluationResult>> {
        let records = self.store.list().await?;
        Ok(records
            .iter()
            .map(Self::evaluate_record)
            .filter(|result| filter.is_none_or(|q| result.qualification == q))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Scores;
    use crate::store::{InMemoryStore, StoreError};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn evaluator_with(records: Vec<StudentRecord>) -> Evaluator {
        Evaluator::new(Arc::new(InMemoryStore::with_records(records)))
    }

    #[tokio::test]
    async fn test_evaluate_scenarios() {
        let evaluator = evaluator_with(vec![
            StudentRecord::new("top", 20.0, 20.0, 20.0),
            StudentRecord::new("mid", 10.0, 10.0, 10.0),
            StudentRecord::new("zero", 0.0, 0.0, 0.0),
        ]);

        let top = evaluator.evaluate("top").await.unwrap();
        assert_eq!(
            top,
            EvaluationResult {
                student_id: "top".to_string(),
                math: 20.0,
                physics: 20.0,
                informatics: 20.0,
                average: 20.0,
                qualification: Qualification::Excellent,
            }
        );

        let mid = evaluator.evaluate("mid").await.unwrap();
        assert_eq!(mid.average, 10.0);
        assert_eq!(mid.qualification, Qualification::AverageGood);

        let zero = evaluator.evaluate("zero").await.unwrap();
        assert_eq!(zero.average, 0.0);
        assert_eq!(zero.qualification, Qualification::Fail);
    }

    #[tokio::test]
    async fn test_classifies_rounded_average() {
        // raw mean 17.9966..., reported as 18.0
        let evaluator = evaluator_with(vec![StudentRecord::new("S001", 18.0, 18.0, 17.99)]);
        let result = evaluator.evaluate("S001").await.unwrap();
        assert_eq!(result.average, 18.0);
        assert_eq!(result.qualification, Qualification::Excellent);
    }

    #[tokio::test]
    async fn test_unknown_student() {
        let evaluator = evaluator_with(vec![StudentRecord::new("S001", 10.0, 10.0, 10.0)]);
        let err = evaluator.evaluate("S404").await.unwrap_err();
        assert!(matches!(err, GradeError::NotFound { ref student_id } if student_id == "S404"));
    }

    #[tokio::test]
    async fn test_empty_id_is_rejected() {
        let evaluator = evaluator_with(vec![]);
        let err = evaluator.evaluate("").await.unwrap_err();
        assert!(matches!(err, GradeError::Validation(_)));
    }

    #[tokio::test]
    async fn test_whitespace_id_is_looked_up() {
        let evaluator = evaluator_with(vec![StudentRecord::new(" ", 12.0, 12.0, 12.0)]);
        let result = evaluator.evaluate(" ").await.unwrap();
        assert_eq!(result.student_id, " ");
        assert_eq!(result.qualification, Qualification::AverageGood);

        let err = evaluator.evaluate("  ").await.unwrap_err();
        assert!(matches!(err, GradeError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_ids_use_first_record() {
        let evaluator = evaluator_with(vec![
            StudentRecord::new("S001", 15.0, 15.0, 15.0),
            StudentRecord::new("S001", 5.0, 5.0, 5.0),
        ]);
        let result = evaluator.evaluate("S001").await.unwrap();
        assert_eq!(result.average, 15.0);
        assert_eq!(result.qualification, Qualification::Good);
    }

    #[tokio::test]
    async fn test_evaluate_is_idempotent() {
        let evaluator = evaluator_with(vec![StudentRecord::new("S001", 13.5, 16.25, 17.0)]);
        let first = evaluator.evaluate("S001").await.unwrap();
        let second = evaluator.evaluate("S001").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_evaluate_all_with_filter() {
        let evaluator = evaluator_with(vec![
            StudentRecord::new("a", 19.0, 19.0, 19.0),
            StudentRecord::new("b", 12.0, 12.0, 12.0),
            StudentRecord::new("c", 18.0, 18.5, 19.0),
        ]);

        let all = evaluator.evaluate_all(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let excellent = evaluator
            .evaluate_all(Some(Qualification::Excellent))
            .await
            .unwrap();
        let ids: Vec<&str> = excellent.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let failing = evaluator.evaluate_all(Some(Qualification::Fail)).await.unwrap();
        assert!(failing.is_empty());
    }

    struct BrokenStore;

    #[async_trait]
    impl StudentStore for BrokenStore {
        async fn find_matching(&self, _student_id: &str) -> Result<Vec<StudentRecord>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        async fn list(&self) -> Result<Vec<StudentRecord>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        async fn insert(&self, _record: StudentRecord) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        async fn update_scores(
            &self,
            _student_id: &str,
            _scores: Scores,
        ) -> Result<StudentRecord, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        async fn is_available(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let evaluator = Evaluator::new(Arc::new(BrokenStore));
        let err = evaluator.evaluate("S001").await.unwrap_err();
        assert!(matches!(err, GradeError::Store(StoreError::Unavailable(_))));
    }

    proptest! {
        #[test]
        fn test_average_matches_rounded_mean(
            math in 0.0f64..=20.0,
            physics in 0.0f64..=20.0,
            informatics in 0.0f64..=20.0,
        ) {
            let record = StudentRecord::new("p", math, physics, informatics);
            let result = Evaluator::evaluate_record(&record);

            let raw = (math + physics + informatics) / 3.0;
            prop_assert_eq!(result.average, (raw * 100.0).round_ties_even() / 100.0);
            prop_assert!((result.average - raw).abs() <= 0.005 + 1e-9);
            prop_assert!((0.0..=20.0).contains(&result.average));
            prop_assert_eq!(result.qualification, Qualification::from_average(result.average));
        }
    }
}
