//! Local file system record store.
//!
//! All records are kept in one JSON array file. Every read parses the file
//! again, so edits made by other processes between requests are picked up.
//! Writes replace the file atomically (temporary file + rename) and are
//! serialized inside this process by a mutex around read-modify-write.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;

use super::{StoreError, StudentStore};
use crate::record::{Scores, StudentRecord};

/// File-backed store
///
/// A missing file is treated as an empty store; it is created on the first
/// write.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl LocalFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    async fn load(&self) -> Result<Vec<StudentRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read(&self.path).await.map_err(|e| {
            StoreError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&contents).map_err(|e| {
            StoreError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, records: &[StudentRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize records: {}", e)))?;
        self.write_atomically(&json).await
    }

    async fn write_atomically(&self, data: &[u8]) -> Result<(), StoreError> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to create directory: {}", e)))?;

        let temp_file = NamedTempFile::new_in(&dir)
            .map_err(|e| StoreError::Io(format!("Failed to create temporary file: {}", e)))?;

        fs::write(temp_file.path(), data)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write temporary file: {}", e)))?;

        temp_file
            .persist(&self.path)
            .map_err(|e| StoreError::Io(format!("Failed to replace {}: {}", self.path.display(), e)))?;

        Ok(())
    }
}

#[async_trait]
impl StudentStore for LocalFileStore {
    async fn find_matching(&self, student_id: &str) -> Result<Vec<StudentRecord>, StoreError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|record| record.student_id == student_id)
            .collect())
    }

    async fn list(&self) -> Result<Vec<StudentRecord>, StoreError> {
        self.load().await
    }

    async fn insert(&self, record: StudentRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        if records.iter().any(|r| r.student_id == record.student_id) {
            return Err(StoreError::Duplicate(record.student_id));
        }
        records.push(record);
        self.save(&records).await
    }

    async fn update_scores(
        &self,
        student_id: &str,
        scores: Scores,
    ) -> Result<StudentRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let index = records
            .iter()
            .position(|r| r.student_id == student_id)
            .ok_or_else(|| StoreError::NotFound(student_id.to_string()))?;

        let updated = records[index].clone().with_scores(scores);
        records[index] = updated.clone();
        self.save(&records).await?;
        Ok(updated)
    }

    async fn is_available(&self) -> bool {
        if self.path.exists() {
            return self.load().await.is_ok();
        }
        fs::create_dir_all(self.parent_dir()).await.is_ok()
    }
}
