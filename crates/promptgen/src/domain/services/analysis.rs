//! Prompt Analysis
//!
//! Keyword heuristics over the user's original prompt.

use serde::Serialize;

const ACTION_WORDS: &[&str] = &[
    "create", "write", "generate", "build", "design", "make", "develop", "analyze", "explain",
];

const QUALITY_WORDS: &[&str] = &[
    "best",
    "high-quality",
    "professional",
    "detailed",
    "comprehensive",
    "excellent",
];

const CONSTRAINT_WORDS: &[&str] = &[
    "must", "should", "need", "require", "without", "avoid", "limit",
];

/// Rough size bucket of the original prompt
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PromptSize {
    Basic,
    Moderate,
    Comprehensive,
    Expert,
}

/// What the keyword scan found
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromptAnalysis {
    pub word_count: usize,
    pub has_action: bool,
    pub has_quality: bool,
    pub has_constraints: bool,
    pub size: PromptSize,
}

/// Scan a prompt for action verbs, quality adjectives and constraint words.
///
/// Words are whole whitespace-separated tokens, so `"write,"` is not the
/// action verb `write`.
pub fn analyze_prompt(prompt: &str) -> PromptAnalysis {
    let lowered = prompt.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let contains_any = |list: &[&str]| list.iter().any(|w| words.contains(w));

    let word_count = words.len();
    let size = match word_count {
        0..=9 => PromptSize::Basic,
        10..=24 => PromptSize::Moderate,
        25..=49 => PromptSize::Comprehensive,
        _ => PromptSize::Expert,
    };

    PromptAnalysis {
        word_count,
        has_action: contains_any(ACTION_WORDS),
        has_quality: contains_any(QUALITY_WORDS),
        has_constraints: contains_any(CONSTRAINT_WORDS),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_action_verb() {
        let analysis = analyze_prompt("Write a story about a dragon who learns to fly");
        assert!(analysis.has_action);
        assert!(!analysis.has_quality);
        assert_eq!(analysis.word_count, 10);
        assert_eq!(analysis.size, PromptSize::Moderate);
    }

    #[test]
    fn test_punctuation_blocks_match() {
        let analysis = analyze_prompt("Please, write, something nice");
        assert!(!analysis.has_action);
    }

    #[test]
    fn test_quality_and_constraints() {
        let analysis = analyze_prompt("a detailed plan that must avoid jargon");
        assert!(analysis.has_quality);
        assert!(analysis.has_constraints);
        assert_eq!(analysis.size, PromptSize::Basic);
    }
}
