//! Service layer for persistence.
//!
//! This module contains the key-value store collaborator and the design
//! service that reads and writes designs through it.

pub mod designs;
pub mod storage;

// Re-export commonly used types and functions
pub use designs::{DesignService, LoadOutcome, LoadedDesign};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
