//! StatsRecord - Site-wide usage counters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Usage counters shown on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub total_prompts_generated: u64,
    pub ai_models_supported: u32,
    pub success_rate: u32,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl StatsRecord {
    /// Hard-coded values used when neither storage nor the seed is readable
    pub fn default_values() -> Self {
        Self {
            total_prompts_generated: 1247,
            ai_models_supported: 15,
            success_rate: 93,
            last_updated: Utc::now(),
        }
    }

    /// Count one more generated prompt
    pub fn incremented(mut self, now: DateTime<Utc>) -> Self {
        self.total_prompts_generated += 1;
        self.last_updated = now;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let stats = StatsRecord::default_values();
        assert_eq!(stats.total_prompts_generated, 1247);
        assert_eq!(stats.ai_models_supported, 15);
        assert_eq!(stats.success_rate, 93);
    }

    #[test]
    fn test_parse_without_timestamp() {
        let stats: StatsRecord = serde_json::from_str(
            r#"{"totalPromptsGenerated": 10, "aiModelsSupported": 15, "successRate": 93}"#,
        )
        .unwrap();
        assert_eq!(stats.total_prompts_generated, 10);
    }
}
