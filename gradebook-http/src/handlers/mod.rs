pub mod students;
pub mod system;

// Re-export all handlers for easier imports
pub use students::*;
pub use system::*;
