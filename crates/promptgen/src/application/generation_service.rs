//! Generation Application Service (Use Case)
//!
//! Handles a form submission: validation, the simulated processing delay,
//! enhancement, session storage and the stats bump.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::application::StatsService;
use crate::domain::{enhance, DomainError, EnhancedPromptResult, PromptForm, StatsRecord};
use crate::ports::{ResultRepository, StatsRepository, StatsSeedSource};

/// Outcome of a successful submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub session_key: String,
    pub result: EnhancedPromptResult,
    /// Updated counters, `None` if the stats store could not be written
    pub stats: Option<StatsRecord>,
}

/// Application service for prompt generation
pub struct GenerationService<R, SR, SS>
where
    R: ResultRepository,
    SR: StatsRepository,
    SS: StatsSeedSource,
{
    results: Arc<R>,
    stats: Arc<StatsService<SR, SS>>,
    delay: Duration,
}

impl<R, SR, SS> GenerationService<R, SR, SS>
where
    R: ResultRepository,
    SR: StatsRepository,
    SS: StatsSeedSource,
{
    pub fn new(results: Arc<R>, stats: Arc<StatsService<SR, SS>>, delay: Duration) -> Self {
        Self {
            results,
            stats,
            delay,
        }
    }

    /// Submit under a fresh session key
    pub async fn submit(&self, form: PromptForm) -> Result<Submission, DomainError> {
        self.submit_to(Uuid::new_v4().to_string(), form).await
    }

    /// Submit, storing the result under `session_key`.
    ///
    /// Validation errors come back before any delay or storage. A failed
    /// stats write is logged and leaves `stats` empty.
    pub async fn submit_to(
        &self,
        session_key: String,
        form: PromptForm,
    ) -> Result<Submission, DomainError> {
        let request = form.validate()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let enhanced = enhance(&request);
        let result = EnhancedPromptResult::new(&request, enhanced);

        if let Err(e) = self.results.save(&session_key, &result).await {
            tracing::error!("Failed to store result for {}: {}", session_key, e);
            return Err(e);
        }

        tracing::info!(
            "✨ Generated prompt: model={}, category={}, level={}",
            result.ai_model,
            result.prompt_type,
            result.complexity_level
        );

        let stats = match self.stats.increment().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!("Stats update failed: {}", e);
                None
            }
        };

        Ok(Submission {
            session_key,
            result,
            stats,
        })
    }
}
