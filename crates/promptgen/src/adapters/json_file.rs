//! JSON file implementations of the repository ports
//!
//! Layout under the data directory:
//! - `simulatedStats.json`: the stats record
//! - `sessions/<session key>.json`: `{ "promptData": <result> }`

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{DomainError, EnhancedPromptResult, StatsRecord};
use crate::ports::{ResultRepository, StatsRepository, PROMPT_DATA_KEY, STATS_KEY};

/// Read a file, treating "not found" as `None`
async fn read_optional(path: &Path) -> Result<Option<String>, DomainError> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DomainError::Repository(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

async fn write_file(path: &Path, contents: String) -> Result<(), DomainError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            DomainError::Repository(format!("failed to create {}: {}", parent.display(), e))
        })?;
    }

    // Readers only ever see the old file or the new one
    let tmp = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));
    let written = tokio::fs::write(&tmp, contents).await;
    let renamed = match written {
        Ok(()) => tokio::fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = renamed {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(DomainError::Repository(format!(
            "failed to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

/// Stats record stored as a single JSON file
pub struct JsonFileStatsRepository {
    path: PathBuf,
}

impl JsonFileStatsRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", STATS_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StatsRepository for JsonFileStatsRepository {
    async fn load(&self) -> Result<Option<StatsRecord>, DomainError> {
        match read_optional(&self.path).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, stats: &StatsRecord) -> Result<(), DomainError> {
        write_file(&self.path, serde_json::to_string_pretty(stats)?).await
    }
}

/// Session results stored as one JSON file per session key
pub struct JsonFileResultRepository {
    dir: PathBuf,
}

impl JsonFileResultRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: data_dir.as_ref().join("sessions"),
        }
    }

    /// File for a session key; keys outside `[A-Za-z0-9_-]` have none
    fn session_path(&self, session_key: &str) -> Option<PathBuf> {
        let valid = !session_key.is_empty()
            && session_key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        valid.then(|| self.dir.join(format!("{}.json", session_key)))
    }
}

#[async_trait]
impl ResultRepository for JsonFileResultRepository {
    async fn save(
        &self,
        session_key: &str,
        result: &EnhancedPromptResult,
    ) -> Result<(), DomainError> {
        let path = self.session_path(session_key).ok_or_else(|| {
            DomainError::Repository(format!("invalid session key: {}", session_key))
        })?;

        let mut slot = HashMap::new();
        slot.insert(PROMPT_DATA_KEY, result);
        write_file(&path, serde_json::to_string_pretty(&slot)?).await
    }

    async fn find(&self, session_key: &str) -> Result<Option<EnhancedPromptResult>, DomainError> {
        let Some(path) = self.session_path(session_key) else {
            return Ok(None);
        };

        let Some(raw) = read_optional(&path).await? else {
            return Ok(None);
        };

        let mut slot: HashMap<String, EnhancedPromptResult> = serde_json::from_str(&raw)?;
        Ok(slot.remove(PROMPT_DATA_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{enhance, PromptForm};
    use std::sync::Arc;
    use chrono::{TimeZone, Utc};

    fn result() -> EnhancedPromptResult {
        let request = PromptForm::new(
            "Build a REST endpoint for orders",
            Some("copilot".into()),
            Some("code".into()),
            3,
        )
        .validate()
        .unwrap();
        EnhancedPromptResult::new_at(
            &request,
            enhance(&request),
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_stats_missing_then_saved() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileStatsRepository::new(dir.path().join("nested"));
        assert_eq!(repo.load().await.unwrap(), None);

        let stats = StatsRecord::default_values();
        repo.save(&stats).await.unwrap();
        assert!(repo.path().ends_with("simulatedStats.json"));
        assert_eq!(repo.load().await.unwrap(), Some(stats));
    }

    #[tokio::test]
    async fn test_stats_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileStatsRepository::new(dir.path());
        std::fs::write(repo.path(), "{not json").unwrap();

        assert!(matches!(
            repo.load().await,
            Err(DomainError::Serialization(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_overlapping_saves_never_expose_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(JsonFileStatsRepository::new(dir.path()));
        repo.save(&StatsRecord::default_values()).await.unwrap();

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    for n in 0..20 {
                        let stats = StatsRecord {
                            total_prompts_generated: 100_000 + i * 100 + n,
                            ..StatsRecord::default_values()
                        };
                        repo.save(&stats).await.unwrap();
                    }
                })
            })
            .collect();

        for _ in 0..200 {
            let loaded = repo.load().await.unwrap().unwrap();
            assert!(
                loaded.total_prompts_generated == 1247
                    || loaded.total_prompts_generated >= 100_000
            );
        }

        for writer in writers {
            writer.await.unwrap();
        }

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("simulatedStats.json")]);
    }

    #[tokio::test]
    async fn test_result_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileResultRepository::new(dir.path());
        let result = result();

        repo.save("session-1", &result).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("sessions/session-1.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["promptData"]["aiModel"], "copilot");

        assert_eq!(repo.find("session-1").await.unwrap(), Some(result));
        assert_eq!(repo.find("session-2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileResultRepository::new(dir.path());

        assert!(repo.save("../escape", &result()).await.is_err());
        assert_eq!(repo.find("../escape").await.unwrap(), None);
    }
}
