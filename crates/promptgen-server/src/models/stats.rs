//! Stats DTO

use chrono::{DateTime, Utc};
use promptgen::StatsRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_prompts_generated: u64,
    pub ai_models_supported: u32,
    pub success_rate: u32,
    pub last_updated: DateTime<Utc>,
}

impl From<StatsRecord> for StatsResponse {
    fn from(stats: StatsRecord) -> Self {
        Self {
            total_prompts_generated: stats.total_prompts_generated,
            ai_models_supported: stats.ai_models_supported,
            success_rate: stats.success_rate,
            last_updated: stats.last_updated,
        }
    }
}
