//! Service Ports
//!
//! Abstract interfaces for read-only external sources.

mod stats_seed;

pub use stats_seed::*;
