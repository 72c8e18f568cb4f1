//! Model Specifications
//!
//! Per-model prompt prefix, tone and output format hints.

use serde::Serialize;

use crate::domain::AiModel;

/// Static description of how to address a model
#[derive(Debug, Clone, Serialize)]
pub struct ModelSpec {
    pub display_name: &'static str,
    pub prompt_prefix: &'static str,
    pub style_description: &'static str,
    pub considerations: &'static str,
    pub key_features: &'static [&'static str],
    pub response_format: &'static str,
    pub token_limit: u32,
    pub temperature: f32,
}

static CHATGPT: ModelSpec = ModelSpec {
    display_name: "ChatGPT (OpenAI)",
    prompt_prefix: "Act as an expert assistant.",
    style_description: "conversational and thorough",
    considerations: "Use clear structure, examples, and step-by-step explanations where appropriate.",
    key_features: &[
        "structured responses",
        "detailed explanations",
        "step-by-step reasoning",
    ],
    response_format: "Well-organized markdown with clear sections and examples",
    token_limit: 4096,
    temperature: 0.7,
};

static CLAUDE: ModelSpec = ModelSpec {
    display_name: "Claude (Anthropic)",
    prompt_prefix: "Please provide a thoughtful and comprehensive response.",
    style_description: "analytical and well-structured",
    considerations: "Focus on accuracy, nuance, and providing multiple perspectives where relevant.",
    key_features: &[
        "analytical reasoning",
        "nuanced analysis",
        "ethical considerations",
    ],
    response_format: "Logical structure with comprehensive analysis and multiple perspectives",
    token_limit: 8192,
    temperature: 0.6,
};

static GEMINI: ModelSpec = ModelSpec {
    display_name: "Gemini (Google)",
    prompt_prefix: "Provide accurate and up-to-date information.",
    style_description: "informative and engaging",
    considerations: "Include relevant context, examples, and practical applications.",
    key_features: &["multimodal analysis", "real-time data", "technical precision"],
    response_format: "Clear structured format with current information and practical insights",
    token_limit: 6144,
    temperature: 0.5,
};

static MIDJOURNEY: ModelSpec = ModelSpec {
    display_name: "Midjourney",
    prompt_prefix: "Create a highly detailed image prompt with specific visual elements.",
    style_description: "descriptive and artistic",
    considerations: "Include art style, lighting, composition, colors, and mood descriptors.",
    key_features: &[
        "artistic style keywords",
        "composition and lighting cues",
        "parameter flags",
    ],
    response_format: "Comma-separated visual descriptors followed by parameter flags",
    token_limit: 1024,
    temperature: 0.9,
};

static DALLE: ModelSpec = ModelSpec {
    display_name: "DALL-E (OpenAI)",
    prompt_prefix: "Generate an image with the following detailed specifications.",
    style_description: "visual and descriptive",
    considerations: "Specify style, mood, lighting, perspective, and artistic elements.",
    key_features: &[
        "natural language scene description",
        "explicit subject placement",
        "style and medium references",
    ],
    response_format: "Single descriptive paragraph naming subject, setting, style, and mood",
    token_limit: 1024,
    temperature: 0.8,
};

static STABLE_DIFFUSION: ModelSpec = ModelSpec {
    display_name: "Stable Diffusion",
    prompt_prefix: "Detailed image generation prompt with specific parameters.",
    style_description: "technical and artistic",
    considerations: "Include negative prompts, style tags, and quality modifiers.",
    key_features: &[
        "weighted style tags",
        "negative prompts",
        "quality modifiers",
    ],
    response_format: "Positive prompt tags, a negative prompt, and sampler settings",
    token_limit: 512,
    temperature: 0.8,
};

static LLAMA: ModelSpec = ModelSpec {
    display_name: "LLaMA (Meta)",
    prompt_prefix: "Please provide a comprehensive and accurate response.",
    style_description: "detailed and systematic",
    considerations: "Focus on clarity, logical flow, and practical examples.",
    key_features: &[
        "efficient processing",
        "research-grade output",
        "detailed analysis",
    ],
    response_format: "Comprehensive structured response with thorough explanations",
    token_limit: 4096,
    temperature: 0.7,
};

static BARD: ModelSpec = ModelSpec {
    display_name: "Bard (Google)",
    prompt_prefix: "I need a thorough and informative response.",
    style_description: "comprehensive and engaging",
    considerations: "Provide multiple angles, context, and actionable insights.",
    key_features: &[
        "conversational depth",
        "current information",
        "multiple perspectives",
    ],
    response_format: "Engaging explanation with clear sections and actionable takeaways",
    token_limit: 4096,
    temperature: 0.7,
};

static COPILOT: ModelSpec = ModelSpec {
    display_name: "GitHub Copilot",
    prompt_prefix: "Generate well-documented, efficient code that follows best practices.",
    style_description: "technical and practical",
    considerations: "Include comments, best practices, and error handling.",
    key_features: &[
        "code optimization",
        "best practices",
        "comprehensive documentation",
    ],
    response_format: "Clean, documented code with examples and explanations",
    token_limit: 2048,
    temperature: 0.3,
};

static GENERAL: ModelSpec = ModelSpec {
    display_name: "General Purpose",
    prompt_prefix: "Provide a comprehensive and helpful response.",
    style_description: "clear and thorough",
    considerations: "Focus on accuracy, clarity, and practical value.",
    key_features: &[
        "versatile approach",
        "comprehensive coverage",
        "clear communication",
    ],
    response_format: "Well-structured, comprehensive response suitable for any AI model",
    token_limit: 4096,
    temperature: 0.6,
};

/// Look up the static spec for a model
pub fn model_spec(model: AiModel) -> &'static ModelSpec {
    match model {
        AiModel::ChatGpt => &CHATGPT,
        AiModel::Claude => &CLAUDE,
        AiModel::Gemini => &GEMINI,
        AiModel::Midjourney => &MIDJOURNEY,
        AiModel::Dalle => &DALLE,
        AiModel::StableDiffusion => &STABLE_DIFFUSION,
        AiModel::Llama => &LLAMA,
        AiModel::Bard => &BARD,
        AiModel::Copilot => &COPILOT,
        AiModel::General => &GENERAL,
    }
}
