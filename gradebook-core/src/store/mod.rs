//! Record store capability.
//!
//! The [`StudentStore`] trait is the only way the rest of the crate touches
//! persisted student records. Backends:
//!
//! - [`InMemoryStore`]: process-local, optionally seeded
//! - [`LocalFileStore`]: a single JSON array file on disk
//!
//! # Ordering
//!
//! Every method that returns several records returns them in *store order*
//! (insertion order for the in-memory store, file order for the file store).
//! The evaluator relies on this to pick the first of several records that
//! share an identifier.

use async_trait::async_trait;
use thiserror::Error;

use crate::record::{Scores, StudentRecord};

pub mod in_memory;
pub mod local_fs;

pub use in_memory::InMemoryStore;
pub use local_fs::LocalFileStore;

/// Storage backend for student records
///
/// # Thread Safety
///
/// Implementations are shared behind an `Arc` between request handlers and
/// must be safe to call concurrently.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All records whose identifier equals `student_id`, in store order
    ///
    /// # Notes
    ///
    /// - An unknown identifier yields an empty vector, not an error
    /// - More than one element means the store violates id uniqueness
    async fn find_matching(&self, student_id: &str) -> Result<Vec<StudentRecord>, StoreError>;

    /// Every record in store order
    async fn list(&self) -> Result<Vec<StudentRecord>, StoreError>;

    /// Append a new record
    ///
    /// Fails with [`StoreError::Duplicate`] if the identifier is already present.
    async fn insert(&self, record: StudentRecord) -> Result<(), StoreError>;

    /// Replace the scores of the first record matching `student_id`
    ///
    /// Returns the updated record, or [`StoreError::NotFound`].
    async fn update_scores(
        &self,
        student_id: &str,
        scores: Scores,
    ) -> Result<StudentRecord, StoreError>;

    /// Check whether the backend can currently serve requests
    ///
    /// Never fails; any problem is reported as `false`.
    async fn is_available(&self) -> bool;
}

/// Errors raised by storage backends
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Duplicate student id: {0}")]
    Duplicate(String),

    #[error("No record for student id: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
