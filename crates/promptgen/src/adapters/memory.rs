//! In-memory implementations of the repository ports

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, EnhancedPromptResult, StatsRecord};
use crate::ports::{ResultRepository, StatsRepository};

/// Process-local stats slot
#[derive(Default)]
pub struct InMemoryStatsRepository {
    stats: RwLock<Option<StatsRecord>>,
}

impl InMemoryStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(stats: StatsRecord) -> Self {
        Self {
            stats: RwLock::new(Some(stats)),
        }
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn load(&self) -> Result<Option<StatsRecord>, DomainError> {
        Ok(self.stats.read().await.clone())
    }

    async fn save(&self, stats: &StatsRecord) -> Result<(), DomainError> {
        *self.stats.write().await = Some(stats.clone());
        Ok(())
    }
}

/// Session results keyed by session key
#[derive(Default)]
pub struct InMemoryResultRepository {
    results: RwLock<HashMap<String, EnhancedPromptResult>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn save(
        &self,
        session_key: &str,
        result: &EnhancedPromptResult,
    ) -> Result<(), DomainError> {
        self.results
            .write()
            .await
            .insert(session_key.to_string(), result.clone());
        Ok(())
    }

    async fn find(&self, session_key: &str) -> Result<Option<EnhancedPromptResult>, DomainError> {
        Ok(self.results.read().await.get(session_key).cloned())
    }
}
