//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the stats seed.

mod generation_service;
mod results_service;
mod stats_service;

pub use generation_service::{GenerationService, Submission};
pub use results_service::{ResultsService, ResultsView};
pub use stats_service::StatsService;
