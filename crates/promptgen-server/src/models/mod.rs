//! promptgen API Data Models
//!
//! - Prompt: Form submission and generated result
//! - Results: Results view (analytics, sections, share text)
//! - Stats: Usage counters
//! - Catalog: Models, categories and complexity levels

mod catalog;
mod prompt;
mod results;
mod stats;

pub use catalog::*;
pub use prompt::*;
pub use results::*;
pub use stats::*;
