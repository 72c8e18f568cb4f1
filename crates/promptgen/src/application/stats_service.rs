//! Stats Application Service (Use Case)
//!
//! Loads and bumps the usage counters with a fixed fallback chain:
//! persistent store, then seed, then built-in defaults.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{DomainError, StatsRecord};
use crate::ports::{StatsRepository, StatsSeedSource};

/// Application service for the stats record
pub struct StatsService<R: StatsRepository, S: StatsSeedSource> {
    repo: Arc<R>,
    seed: Arc<S>,
    /// Held across load + save so concurrent increments don't drop counts
    write_lock: Mutex<()>,
}

impl<R: StatsRepository, S: StatsSeedSource> StatsService<R, S> {
    pub fn new(repo: Arc<R>, seed: Arc<S>) -> Self {
        Self {
            repo,
            seed,
            write_lock: Mutex::new(()),
        }
    }

    /// Current stats. Never fails.
    pub async fn load(&self) -> StatsRecord {
        match self.repo.load().await {
            Ok(Some(stats)) => return stats,
            Ok(None) => {}
            Err(e) => tracing::warn!("Stored stats unreadable, using seed: {}", e),
        }

        match self.seed.fetch().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!("Stats seed unavailable, using defaults: {}", e);
                StatsRecord::default_values()
            }
        }
    }

    /// Count one generated prompt now
    pub async fn increment(&self) -> Result<StatsRecord, DomainError> {
        self.increment_at(Utc::now()).await
    }

    /// Count one generated prompt at `now` and persist the result
    pub async fn increment_at(&self, now: DateTime<Utc>) -> Result<StatsRecord, DomainError> {
        let _guard = self.write_lock.lock().await;
        let updated = self.load().await.incremented(now);
        self.repo.save(&updated).await?;

        tracing::info!(
            "📈 Prompts generated: {}",
            updated.total_prompts_generated
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStatsRepository, JsonFileStatsRepository, StatsSeed};
    use chrono::TimeZone;

    fn service<R: StatsRepository>(repo: R, seed: StatsSeed) -> StatsService<R, StatsSeed> {
        StatsService::new(Arc::new(repo), Arc::new(seed))
    }

    #[tokio::test]
    async fn test_load_prefers_store() {
        let stored = StatsRecord {
            total_prompts_generated: 42,
            ..StatsRecord::default_values()
        };
        let stats = service(InMemoryStatsRepository::with_stats(stored), StatsSeed::Embedded)
            .load()
            .await;
        assert_eq!(stats.total_prompts_generated, 42);
    }

    #[tokio::test]
    async fn test_corrupt_store_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileStatsRepository::new(dir.path());
        std::fs::write(repo.path(), "garbage").unwrap();

        let seed_path = dir.path().join("seed.json");
        std::fs::write(
            &seed_path,
            r#"{"totalPromptsGenerated": 7, "aiModelsSupported": 10, "successRate": 90}"#,
        )
        .unwrap();

        let stats = service(repo, StatsSeed::File(seed_path)).load().await;
        assert_eq!(stats.total_prompts_generated, 7);
    }

    #[tokio::test]
    async fn test_missing_seed_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stats = service(
            InMemoryStatsRepository::new(),
            StatsSeed::File(dir.path().join("absent.json")),
        )
        .load()
        .await;
        assert_eq!(stats.total_prompts_generated, 1247);
        assert_eq!(stats.ai_models_supported, 15);
    }

    #[tokio::test]
    async fn test_two_increments() {
        let repo = Arc::new(InMemoryStatsRepository::new());
        let service = StatsService::new(repo.clone(), Arc::new(StatsSeed::Embedded));

        let first = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 0).unwrap();
        service.increment_at(first).await.unwrap();
        let updated = service.increment_at(second).await.unwrap();

        assert_eq!(updated.total_prompts_generated, 1249);
        assert_eq!(updated.last_updated, second);
        assert_eq!(repo.load().await.unwrap(), Some(updated));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_increments_on_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileStatsRepository::new(dir.path());
        repo.save(&StatsRecord {
            total_prompts_generated: 100_000,
            ..StatsRecord::default_values()
        })
        .await
        .unwrap();

        let service = Arc::new(service(repo, StatsSeed::Embedded));
        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    for _ in 0..5 {
                        service.increment().await.unwrap();
                    }
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(service.load().await.total_prompts_generated, 100_320);
    }
}
