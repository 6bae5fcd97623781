//! quizrank-store — storage gateway implementations.
//!
//! Implements the `StorageGateway` trait from `quizrank-core` for an
//! in-memory map and a JSON-file-per-slot directory layout, plus the
//! configuration that selects the data directory.

pub mod config;
pub mod file;
pub mod memory;

pub use config::{load_config, load_config_from, QuizrankConfig};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
