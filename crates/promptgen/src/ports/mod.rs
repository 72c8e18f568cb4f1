//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the application layer
//! reaches storage and the stats seed.
//!
//! Implementations of these traits live in `adapters/`.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
