//! AiModel - Target model a prompt is optimized for

use serde::{Deserialize, Serialize};

/// AI model the enhanced prompt is tuned for
///
/// Unknown ids deserialize to [`AiModel::General`], so stored or shared
/// records never fail on a model that has since been removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum AiModel {
    ChatGpt,
    Claude,
    Gemini,
    Midjourney,
    Dalle,
    StableDiffusion,
    Llama,
    Bard,
    Copilot,
    #[default]
    General,
}

impl AiModel {
    pub const ALL: [AiModel; 10] = [
        AiModel::ChatGpt,
        AiModel::Claude,
        AiModel::Gemini,
        AiModel::Midjourney,
        AiModel::Dalle,
        AiModel::StableDiffusion,
        AiModel::Llama,
        AiModel::Bard,
        AiModel::Copilot,
        AiModel::General,
    ];

    /// Wire id (`"stable-diffusion"`, `"chatgpt"`, ...)
    pub fn id(self) -> &'static str {
        match self {
            AiModel::ChatGpt => "chatgpt",
            AiModel::Claude => "claude",
            AiModel::Gemini => "gemini",
            AiModel::Midjourney => "midjourney",
            AiModel::Dalle => "dalle",
            AiModel::StableDiffusion => "stable-diffusion",
            AiModel::Llama => "llama",
            AiModel::Bard => "bard",
            AiModel::Copilot => "copilot",
            AiModel::General => "general",
        }
    }

    /// Resolve an id, falling back to `general` for empty or unknown input
    pub fn from_id_lossy(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    /// Short label used by the results view
    pub fn short_name(self) -> &'static str {
        match self {
            AiModel::ChatGpt => "ChatGPT",
            AiModel::Claude => "Claude",
            AiModel::Gemini => "Gemini",
            AiModel::Midjourney => "Midjourney",
            AiModel::Dalle => "DALL-E",
            AiModel::StableDiffusion => "Stable Diffusion",
            AiModel::Llama => "LLaMA",
            AiModel::Bard => "Bard",
            AiModel::Copilot => "GitHub Copilot",
            AiModel::General => "General Purpose",
        }
    }

    pub fn is_image_generator(self) -> bool {
        matches!(
            self,
            AiModel::Midjourney | AiModel::Dalle | AiModel::StableDiffusion
        )
    }
}

impl std::fmt::Display for AiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for AiModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chatgpt" => Ok(AiModel::ChatGpt),
            "claude" => Ok(AiModel::Claude),
            "gemini" => Ok(AiModel::Gemini),
            "midjourney" => Ok(AiModel::Midjourney),
            "dalle" => Ok(AiModel::Dalle),
            "stable-diffusion" => Ok(AiModel::StableDiffusion),
            "llama" => Ok(AiModel::Llama),
            "bard" => Ok(AiModel::Bard),
            "copilot" => Ok(AiModel::Copilot),
            "general" => Ok(AiModel::General),
            _ => Err(format!("Unknown AI model: {}", s)),
        }
    }
}

impl From<String> for AiModel {
    fn from(id: String) -> Self {
        AiModel::from_id_lossy(&id)
    }
}

impl From<AiModel> for String {
    fn from(model: AiModel) -> Self {
        model.id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for model in AiModel::ALL {
            assert_eq!(model.id().parse::<AiModel>().unwrap(), model);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_general() {
        assert_eq!(AiModel::from_id_lossy(""), AiModel::General);
        assert_eq!(AiModel::from_id_lossy("gpt-9"), AiModel::General);
        assert!("gpt-9".parse::<AiModel>().is_err());
    }

    #[test]
    fn test_ids_are_exact() {
        assert!("Claude".parse::<AiModel>().is_err());
        assert!(" claude".parse::<AiModel>().is_err());
        assert_eq!(AiModel::from_id_lossy("ChatGPT"), AiModel::General);
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&AiModel::StableDiffusion).unwrap();
        assert_eq!(json, "\"stable-diffusion\"");

        let model: AiModel = serde_json::from_str("\"not-a-model\"").unwrap();
        assert_eq!(model, AiModel::General);
    }

    #[test]
    fn test_image_generators() {
        let image: Vec<AiModel> = AiModel::ALL
            .into_iter()
            .filter(|m| m.is_image_generator())
            .collect();
        assert_eq!(
            image,
            vec![AiModel::Midjourney, AiModel::Dalle, AiModel::StableDiffusion]
        );
    }
}
