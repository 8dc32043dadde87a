use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc};
use tracing::info;

use crate::record::StudentRecord;
use crate::store::{InMemoryStore, LocalFileStore, StoreError, StudentStore};

/// Which record store backs the application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Process-local store, optionally seeded from a JSON array file
    InMemory {
        #[serde(default)]
        seed_file: Option<PathBuf>,
    },

    /// JSON array file read on every request
    LocalFile {
        #[serde(default = "default_data_file")]
        path: PathBuf,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::InMemory { seed_file: None }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("students.json")
}

impl StoreConfig {
    /// Construct the configured backend
    pub async fn build(&self) -> Result<Arc<dyn StudentStore>, StoreError> {
        match self {
            StoreConfig::InMemory { seed_file: None } => {
                info!("Using empty in-memory store");
                Ok(Arc::new(InMemoryStore::new()))
            }
            StoreConfig::InMemory {
                seed_file: Some(path),
            } => {
                let contents = tokio::fs::read(path).await.map_err(|e| {
                    StoreError::Io(format!("Failed to read seed {}: {}", path.display(), e))
                })?;
                let records: Vec<StudentRecord> =
                    serde_json::from_slice(&contents).map_err(|e| {
                        StoreError::Serialization(format!(
                            "Failed to parse seed {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                info!(
                    records = records.len(),
                    seed = %path.display(),
                    "Using seeded in-memory store"
                );
                Ok(Arc::new(InMemoryStore::with_records(records)))
            }
            StoreConfig::LocalFile { path } => {
                info!(path = %path.display(), "Using local file store");
                Ok(Arc::new(LocalFileStore::new(path.clone())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_deserialize_variants() {
        let config: StoreConfig = serde_json::from_str(r#"{"backend": "in_memory"}"#).unwrap();
        assert_eq!(config, StoreConfig::default());

        let config: StoreConfig = serde_json::from_str(r#"{"backend": "local_file"}"#).unwrap();
        assert_eq!(
            config,
            StoreConfig::LocalFile {
                path: PathBuf::from("students.json")
            }
        );

        let config: StoreConfig =
            serde_json::from_str(r#"{"backend": "local_file", "path": "/tmp/x.json"}"#).unwrap();
        assert_eq!(
            config,
            StoreConfig::LocalFile {
                path: PathBuf::from("/tmp/x.json")
            }
        );
    }

    #[tokio::test]
    async fn test_build_seeded_store() {
        let temp_dir = TempDir::new().unwrap();
        let seed = temp_dir.path().join("seed.json");
        std::fs::write(
            &seed,
            r#"[{"student_id": "S001", "math": 18, "physics": 18, "informatics": 18}]"#,
        )
        .unwrap();

        let store = StoreConfig::InMemory {
            seed_file: Some(seed),
        }
        .build()
        .await
        .unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_build_missing_seed_fails() {
        let err = StoreConfig::InMemory {
            seed_file: Some(PathBuf::from("/nonexistent/seed.json")),
        }
        .build()
        .await
        .err()
        .unwrap();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
