//! Complexity Specifications
//!
//! The five slider levels, from Basic to Master.

use serde::Serialize;

use crate::domain::{ComplexityLevel, ContextDepth, DetailLevel};

/// Static description of a complexity level
#[derive(Debug, Clone, Serialize)]
pub struct ComplexitySpec {
    pub display_name: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub word_range: (u32, u32),
    /// Inclusion threshold for the optional prompt sections
    pub section_count: u8,
    pub detail_level: DetailLevel,
    pub examples_enabled: bool,
    pub context_depth: ContextDepth,
}

static BASIC: ComplexitySpec = ComplexitySpec {
    display_name: "Basic",
    description: "Simple and straightforward prompts",
    characteristics: &[
        "concise instructions",
        "basic requirements",
        "minimal constraints",
    ],
    word_range: (40, 100),
    section_count: 2,
    detail_level: DetailLevel::Minimal,
    examples_enabled: false,
    context_depth: ContextDepth::Basic,
};

static DETAILED: ComplexitySpec = ComplexitySpec {
    display_name: "Detailed",
    description: "Enhanced prompts with clear specifications",
    characteristics: &[
        "clear instructions",
        "specific requirements",
        "some context",
        "basic examples",
    ],
    word_range: (100, 250),
    section_count: 3,
    detail_level: DetailLevel::Moderate,
    examples_enabled: true,
    context_depth: ContextDepth::Moderate,
};

static ADVANCED: ComplexitySpec = ComplexitySpec {
    display_name: "Advanced",
    description: "Comprehensive prompts with detailed specifications",
    characteristics: &[
        "detailed instructions",
        "multiple requirements",
        "rich context",
        "examples and constraints",
    ],
    word_range: (250, 450),
    section_count: 4,
    detail_level: DetailLevel::Comprehensive,
    examples_enabled: true,
    context_depth: ContextDepth::Detailed,
};

static EXPERT: ComplexitySpec = ComplexitySpec {
    display_name: "Expert",
    description: "Professional-grade prompts with advanced specifications",
    characteristics: &[
        "expert-level instructions",
        "complex requirements",
        "multiple constraints",
        "quality criteria",
        "edge cases",
    ],
    word_range: (450, 750),
    section_count: 6,
    detail_level: DetailLevel::Expert,
    examples_enabled: true,
    context_depth: ContextDepth::Comprehensive,
};

static MASTER: ComplexitySpec = ComplexitySpec {
    display_name: "Master",
    description: "Exhaustive professional prompts with maximum detail",
    characteristics: &[
        "master-level instructions",
        "comprehensive requirements",
        "detailed constraints",
        "quality assurance",
        "edge case handling",
        "optimization strategies",
        "validation criteria",
    ],
    word_range: (750, 1500),
    section_count: 8,
    detail_level: DetailLevel::Exhaustive,
    examples_enabled: true,
    context_depth: ContextDepth::Exhaustive,
};

/// Look up the static spec for a level
pub fn complexity_spec(level: ComplexityLevel) -> &'static ComplexitySpec {
    match level.value() {
        1 => &BASIC,
        2 => &DETAILED,
        4 => &EXPERT,
        5 => &MASTER,
        _ => &ADVANCED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_count_is_monotonic() {
        let counts: Vec<u8> = ComplexityLevel::all()
            .map(|l| complexity_spec(l).section_count)
            .collect();
        assert_eq!(counts, vec![2, 3, 4, 6, 8]);
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_detail_levels_follow_slider() {
        let details: Vec<DetailLevel> = ComplexityLevel::all()
            .map(|l| complexity_spec(l).detail_level)
            .collect();
        assert_eq!(
            details,
            vec![
                DetailLevel::Minimal,
                DetailLevel::Moderate,
                DetailLevel::Comprehensive,
                DetailLevel::Expert,
                DetailLevel::Exhaustive,
            ]
        );
    }
}
