//! In-memory record store.
//!
//! Records live in a `Vec` behind a `tokio::sync::RwLock` so that store order
//! is insertion order. Clones share the same underlying records.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{StoreError, StudentStore};
use crate::record::{Scores, StudentRecord};

/// Process-local store, lost when the process exits
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<Vec<StudentRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `records` exactly as given.
    ///
    /// Seeding bypasses the uniqueness check applied by [`StudentStore::insert`],
    /// so a seed file with repeated identifiers is kept as is.
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl StudentStore for InMemoryStore {
    async fn find_matching(&self, student_id: &str) -> Result<Vec<StudentRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| record.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<StudentRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, record: StudentRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.student_id == record.student_id) {
            return Err(StoreError::Duplicate(record.student_id));
        }
        records.push(record);
        Ok(())
    }

    async fn update_scores(
        &self,
        student_id: &str,
        scores: Scores,
    ) -> Result<StudentRecord, StoreError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.student_id == student_id)
            .ok_or_else(|| StoreError::NotFound(student_id.to_string()))?;
        record.math = scores.math;
        record.physics = scores.physics;
        record.informatics = scores.informatics;
        Ok(record.clone())
    }

    async fn is_available(&self) -> bool {
        true
    }
}
