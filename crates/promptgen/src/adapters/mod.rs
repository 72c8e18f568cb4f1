//! Storage Adapters
//!
//! Implementations of the ports shared by the server and the CLI.

pub mod json_file;
pub mod memory;
pub mod seed;

// Re-exports
pub use json_file::{JsonFileResultRepository, JsonFileStatsRepository};
pub use memory::{InMemoryResultRepository, InMemoryStatsRepository};
pub use seed::StatsSeed;
