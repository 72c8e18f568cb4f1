//! Result Report
//!
//! Everything the results view derives from a stored [`EnhancedPromptResult`]:
//! section re-parsing, analytics, the download artifact and share payloads.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::domain::{complexity_spec, DomainError, EnhancedPromptResult};

/// Staged progress shown while the results view "prepares" a prompt
pub const LOADING_STEPS: [(&str, u8); 5] = [
    ("Analyzing your input...", 20),
    ("Selecting optimization strategies...", 40),
    ("Applying AI model specifications...", 60),
    ("Enhancing prompt structure...", 80),
    ("Finalizing professional prompt...", 100),
];

/// Per-step delay bounds for [`LOADING_STEPS`], in milliseconds
pub const LOADING_STEP_DELAY_MS: (u64, u64) = (800, 1200);

/// Pause after the last loading step
pub const LOADING_FINAL_DELAY_MS: u64 = 500;

pub const SHARE_TITLE: &str = "AI Prompt Generator Pro - Enhanced Prompt";

const SHARE_PREVIEW_CHARS: usize = 200;
const FALLBACK_SECTION_TITLE: &str = "Enhanced Prompt";

/// A `**Title**` block recovered from enhanced text
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParsedSection {
    pub title: String,
    pub content: String,
}

/// Split enhanced text on `**Title**` markers.
///
/// Titles cannot contain `*`. Blocks with an empty title or empty content are
/// dropped; text without any usable block becomes one "Enhanced Prompt"
/// section.
pub fn parse_sections(text: &str) -> Vec<ParsedSection> {
    let markers = find_markers(text);

    let mut sections: Vec<ParsedSection> = markers
        .iter()
        .enumerate()
        .filter_map(|(idx, marker)| {
            let content_end = markers.get(idx + 1).map_or(text.len(), |next| next.start);
            let title = text[marker.title_start..marker.title_end].trim();
            let content = text[marker.end..content_end].trim();

            (!title.is_empty() && !content.is_empty()).then(|| ParsedSection {
                title: title.to_string(),
                content: content.to_string(),
            })
        })
        .collect();

    if sections.is_empty() {
        sections.push(ParsedSection {
            title: FALLBACK_SECTION_TITLE.to_string(),
            content: text.to_string(),
        });
    }

    sections
}

struct Marker {
    start: usize,
    title_start: usize,
    title_end: usize,
    end: usize,
}

fn find_markers(text: &str) -> Vec<Marker> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'*' {
            let title_start = i + 2;
            let title_end = bytes[title_start..]
                .iter()
                .position(|b| *b == b'*')
                .map_or(bytes.len(), |p| title_start + p);

            if title_end > title_start && bytes.get(title_end + 1) == Some(&b'*') {
                markers.push(Marker {
                    start: i,
                    title_start,
                    title_end,
                    end: title_end + 2,
                });
                i = title_end + 2;
                continue;
            }
        }
        i += 1;
    }

    markers
}

/// Figures shown next to an enhanced prompt
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnalytics {
    pub word_count: usize,
    pub char_count: usize,
    pub section_count: usize,
    pub optimized_for: String,
    pub complexity_label: String,
    pub category_label: String,
}

impl PromptAnalytics {
    pub fn from_result(result: &EnhancedPromptResult) -> Self {
        let enhanced = &result.enhanced;

        Self {
            word_count: enhanced.split_whitespace().count(),
            char_count: enhanced.chars().count(),
            section_count: parse_sections(enhanced).len(),
            optimized_for: result.ai_model.short_name().to_string(),
            complexity_label: complexity_spec(result.complexity_level)
                .display_name
                .to_string(),
            category_label: result.prompt_type.display_name().to_string(),
        }
    }
}

/// Plain-text download body for a result
pub fn download_artifact<Tz>(result: &EnhancedPromptResult, generated_on: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let original = if result.original.is_empty() {
        "N/A"
    } else {
        result.original.as_str()
    };

    format!(
        "AI PROMPT GENERATOR PRO - ENHANCED PROMPT\n\
         Generated on: {generated_on}\n\
         \n\
         ORIGINAL PROMPT:\n\
         {original}\n\
         \n\
         ENHANCED PROMPT:\n\
         {enhanced}\n\
         \n\
         SETTINGS:\n\
         - AI Model: {model}\n\
         - Category: {category}\n\
         - Complexity: {complexity}\n\
         \n\
         Generated by AI Prompt Generator Pro\n",
        generated_on = generated_on.format("%-m/%-d/%Y, %-I:%M:%S %p"),
        original = original,
        enhanced = result.enhanced,
        model = result.ai_model.short_name(),
        category = result.prompt_type.display_name(),
        complexity = complexity_spec(result.complexity_level).display_name,
    )
}

/// `enhanced-prompt-<unix millis>.txt`
pub fn download_file_name(now: DateTime<Local>) -> String {
    format!("enhanced-prompt-{}.txt", now.timestamp_millis())
}

/// Short teaser used when sharing a result
pub fn share_text(result: &EnhancedPromptResult) -> String {
    let preview: String = result.enhanced.chars().take(SHARE_PREVIEW_CHARS).collect();
    format!(
        "Check out this professionally enhanced AI prompt:\n\n{}...",
        preview
    )
}

/// URL-encoded result JSON, suitable for a `data` query parameter
pub fn share_query(result: &EnhancedPromptResult) -> Result<String, DomainError> {
    let json = serde_json::to_string(result)?;
    Ok(urlencoding::encode(&json).into_owned())
}

/// `<base>?data=<encoded>`
pub fn share_link(base: &str, result: &EnhancedPromptResult) -> Result<String, DomainError> {
    let separator = if base.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}data={}", base, separator, share_query(result)?))
}

/// Pull the raw `data` value out of a share link, if there is one
pub fn share_data_from_link(link: &str) -> Option<&str> {
    let (_, query) = link.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .filter(|value| !value.is_empty())
}

/// Decode a `data` value back into a result.
///
/// Accepts the value either still percent-encoded or already decoded by a
/// query-string extractor.
pub fn decode_shared(data: &str) -> Result<EnhancedPromptResult, DomainError> {
    if let Ok(result) = serde_json::from_str(data) {
        return Ok(result);
    }

    let decoded = urlencoding::decode(data)
        .map_err(|e| DomainError::Serialization(format!("invalid share payload: {}", e)))?;
    Ok(serde_json::from_str(&decoded)?)
}
