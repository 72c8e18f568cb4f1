//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PromptForm / PromptRequest: Form input and its validated form
//! - EnhancedPromptResult: One generated prompt
//! - StatsRecord: Usage counters

mod enhanced_prompt;
mod prompt_request;
mod stats;

pub use enhanced_prompt::*;
pub use prompt_request::*;
pub use stats::*;
