//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod result_repository;
mod stats_repository;

pub use result_repository::*;
pub use stats_repository::*;
