//! # Gradebook core
//!
//! Domain layer of the gradebook service: student score records, the
//! qualification classifier and the grade evaluator built on top of a
//! pluggable record store.
//!
//! ## Layers
//!
//! - Records and score validation ([`record`])
//! - Averaging and tier classification ([`qualification`])
//! - Read-only evaluation of a student ([`evaluator`])
//! - Record management over a shared store ([`gradebook`])
//! - Storage backends ([`store`]) selected by [`config`]
//!
//! ## Example
//!
//! ```no_run
//! use gradebook_core::{Gradebook, StudentRecord, store::InMemoryStore};
//!
//! # async fn example() -> Result<(), gradebook_core::GradeError> {
//! let gradebook = Gradebook::new(InMemoryStore::default());
//! gradebook
//!     .register(StudentRecord::new("S001", 18.0, 17.5, 19.0))
//!     .await?;
//!
//! let result = gradebook.evaluator().evaluate("S001").await?;
//! println!("{} -> {}", result.average, result.qualification);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod gradebook;
pub mod qualification;
pub mod record;
pub mod store;

pub use error::{GradeError, GradeResult};
pub use evaluator::{EvaluationResult, Evaluator};
pub use gradebook::Gradebook;
pub use qualification::{Qualification, round_half_even};
pub use record::{MAX_SCORE, MIN_SCORE, Scores, StudentRecord};
