pub mod students;

// Re-export all models for easier imports
pub use students::*;
