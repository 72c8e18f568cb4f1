//! Result Repository Port
//!
//! Per-session storage handing a generated prompt to the results view.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, EnhancedPromptResult};

/// Storage key of the last result within a session
pub const PROMPT_DATA_KEY: &str = "promptData";

/// Repository interface for generated results
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Store the latest result for a session, replacing any previous one
    async fn save(
        &self,
        session_key: &str,
        result: &EnhancedPromptResult,
    ) -> Result<(), DomainError>;

    /// Find the result stored for a session
    async fn find(&self, session_key: &str) -> Result<Option<EnhancedPromptResult>, DomainError>;
}
