//! Category Specifications
//!
//! Key elements, example prompt patterns and enhancement strategies per
//! content category.

use serde::Serialize;

use crate::domain::{Category, DetailLevel};

/// Static description of a content category
#[derive(Debug, Clone, Serialize)]
pub struct CategorySpec {
    pub display_name: &'static str,
    pub key_elements: &'static [&'static str],
    pub prompt_patterns: &'static [&'static str],
    pub enhancement_strategies: &'static [&'static str],
}

static CREATIVE: CategorySpec = CategorySpec {
    display_name: "Creative Writing",
    key_elements: &[
        "narrative voice",
        "genre",
        "tone",
        "style",
        "character development",
        "plot structure",
    ],
    prompt_patterns: &[
        "Write a [genre] [format] about [subject] in the style of [style/author]",
        "Create a [character type] who [situation] and must [challenge]",
        "Develop a story that explores [theme] through [setting]",
    ],
    enhancement_strategies: &[
        "Specify narrative voice and perspective",
        "Define genre conventions and expectations",
        "Include character motivation and development arcs",
        "Describe setting and world-building requirements",
        "Establish tone, mood, and atmosphere",
        "Set word count and structure requirements",
    ],
};

static CODE: CategorySpec = CategorySpec {
    display_name: "Code Generation",
    key_elements: &[
        "language",
        "functionality",
        "architecture",
        "best practices",
        "error handling",
        "documentation",
    ],
    prompt_patterns: &[
        "Write [language] code that [functionality] using [framework/library]",
        "Create a [architecture pattern] implementation for [use case]",
        "Develop a [algorithm/function] that [specific requirements]",
    ],
    enhancement_strategies: &[
        "Specify programming language and version",
        "Define functional requirements clearly",
        "Include performance and scalability needs",
        "Specify coding standards and best practices",
        "Request error handling and edge cases",
        "Ask for comments and documentation",
        "Include testing requirements",
    ],
};

static ANALYSIS: CategorySpec = CategorySpec {
    display_name: "Data Analysis",
    key_elements: &[
        "data source",
        "methodology",
        "metrics",
        "visualization",
        "insights",
        "recommendations",
    ],
    prompt_patterns: &[
        "Analyze [data type] to [objective] using [methodology]",
        "Perform [analysis type] on [dataset] focusing on [key metrics]",
        "Generate insights about [business question] from [data source]",
    ],
    enhancement_strategies: &[
        "Define data sources and formats",
        "Specify analysis methodology and tools",
        "Identify key metrics and KPIs",
        "Request specific visualization types",
        "Ask for actionable insights and recommendations",
        "Include statistical significance requirements",
        "Specify audience and presentation format",
    ],
};

static IMAGE: CategorySpec = CategorySpec {
    display_name: "Image Generation",
    key_elements: &[
        "subject",
        "composition",
        "style",
        "lighting",
        "mood",
        "technical specs",
    ],
    prompt_patterns: &[
        "Create an image of [subject] in [style] with [composition]",
        "Generate a [mood] [scene type] featuring [elements]",
        "Design a [format] showing [subject] in the style of [artistic movement]",
    ],
    enhancement_strategies: &[
        "Describe the main subject clearly",
        "Specify artistic style and movement",
        "Define composition and framing",
        "Include lighting and color palette",
        "Set mood and atmosphere",
        "Add technical specifications (resolution, aspect ratio)",
        "Include negative prompts for unwanted elements",
    ],
};

static BUSINESS: CategorySpec = CategorySpec {
    display_name: "Business Strategy",
    key_elements: &[
        "objectives",
        "market analysis",
        "strategy",
        "implementation",
        "metrics",
        "risks",
    ],
    prompt_patterns: &[
        "Develop a [strategy type] for [business objective] in [market/industry]",
        "Create a [business plan component] for [company type] targeting [audience]",
        "Analyze [business challenge] and provide [solution type]",
    ],
    enhancement_strategies: &[
        "Define clear business objectives and goals",
        "Specify target market and audience",
        "Include competitive landscape analysis",
        "Request implementation timeline and steps",
        "Ask for success metrics and KPIs",
        "Include risk assessment and mitigation",
        "Specify budget and resource constraints",
    ],
};

static EDUCATION: CategorySpec = CategorySpec {
    display_name: "Educational Content",
    key_elements: &[
        "learning objectives",
        "audience",
        "pedagogy",
        "assessment",
        "engagement",
        "outcomes",
    ],
    prompt_patterns: &[
        "Create a [lesson type] for [audience] to learn [subject]",
        "Develop [educational material] that teaches [concept] through [method]",
        "Design an [assessment type] for [learning objective]",
    ],
    enhancement_strategies: &[
        "Define clear learning objectives",
        "Specify target audience and skill level",
        "Include pedagogical approach and methods",
        "Request engagement and interaction elements",
        "Ask for assessment and evaluation criteria",
        "Include accessibility considerations",
        "Specify format and delivery method",
    ],
};

static MARKETING: CategorySpec = CategorySpec {
    display_name: "Marketing Copy",
    key_elements: &[
        "audience",
        "message",
        "channel",
        "tone",
        "call-to-action",
        "brand voice",
    ],
    prompt_patterns: &[
        "Write [marketing material] for [product/service] targeting [audience]",
        "Create [campaign type] content that [objective] for [brand]",
        "Develop [copy type] that converts [audience] to [action]",
    ],
    enhancement_strategies: &[
        "Define target audience demographics and psychographics",
        "Specify key message and value proposition",
        "Include brand voice and tone guidelines",
        "Request specific call-to-action elements",
        "Specify marketing channel and format constraints",
        "Include competitive positioning",
        "Ask for A/B testing variations",
    ],
};

static RESEARCH: CategorySpec = CategorySpec {
    display_name: "Research & Analysis",
    key_elements: &[
        "research question",
        "methodology",
        "sources",
        "analysis",
        "findings",
        "implications",
    ],
    prompt_patterns: &[
        "Research [topic] to [objective] using [methodology]",
        "Analyze [subject] from [perspective] based on [sources]",
        "Investigate [research question] and provide [output type]",
    ],
    enhancement_strategies: &[
        "Define clear research questions and hypotheses",
        "Specify research methodology and approach",
        "Include credible source requirements",
        "Request analysis framework and criteria",
        "Ask for evidence-based conclusions",
        "Include limitations and bias considerations",
        "Specify output format and audience",
    ],
};

static PROBLEM_SOLVING: CategorySpec = CategorySpec {
    display_name: "Problem Solving",
    key_elements: &[
        "problem definition",
        "constraints",
        "root causes",
        "alternatives",
        "evaluation criteria",
        "implementation plan",
    ],
    prompt_patterns: &[
        "Solve [problem] given [constraints] and optimize for [goal]",
        "Identify the root cause of [issue] in [context] and propose [solution type]",
        "Compare [alternatives] for [decision] using [evaluation criteria]",
    ],
    enhancement_strategies: &[
        "Define the problem and its scope precisely",
        "List known constraints and assumptions",
        "Ask for root cause analysis before solutions",
        "Request multiple alternative solutions",
        "Specify evaluation criteria and trade-offs",
        "Include implementation steps and owners",
        "Ask for risks and fallback options",
    ],
};

/// Look up the static spec for a category; `Other` has none
pub fn category_spec(category: Category) -> Option<&'static CategorySpec> {
    match category {
        Category::Creative => Some(&CREATIVE),
        Category::Code => Some(&CODE),
        Category::Analysis => Some(&ANALYSIS),
        Category::Image => Some(&IMAGE),
        Category::Business => Some(&BUSINESS),
        Category::Education => Some(&EDUCATION),
        Category::Marketing => Some(&MARKETING),
        Category::Research => Some(&RESEARCH),
        Category::ProblemSolving => Some(&PROBLEM_SOLVING),
        Category::Other => None,
    }
}

/// Leading verb phrase prepended to a task that has no action verb.
///
/// Creative and code prompts have their own verb ladders; every other
/// category uses the analytical ladder.
pub fn action_phrase(category: Category, detail: DetailLevel) -> &'static str {
    match category {
        Category::Creative => match detail {
            DetailLevel::Minimal => "Create",
            DetailLevel::Moderate => "Create and develop",
            DetailLevel::Comprehensive => "Create, develop, and craft",
            DetailLevel::Expert => "Create, develop, craft, and optimize",
            DetailLevel::Exhaustive => "Create, develop, craft, optimize, and refine",
        },
        Category::Code => match detail {
            DetailLevel::Minimal => "Write",
            DetailLevel::Moderate => "Write and implement",
            DetailLevel::Comprehensive => "Write, implement, and optimize",
            DetailLevel::Expert => "Write, implement, optimize, and document",
            DetailLevel::Exhaustive => "Write, implement, optimize, document, and thoroughly test",
        },
        _ => match detail {
            DetailLevel::Minimal => "Analyze",
            DetailLevel::Moderate => "Analyze and evaluate",
            DetailLevel::Comprehensive => "Analyze, evaluate, and interpret",
            DetailLevel::Expert => "Analyze, evaluate, interpret, and synthesize",
            DetailLevel::Exhaustive => {
                "Analyze, evaluate, interpret, synthesize, and provide comprehensive insights"
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_other_lacks_spec() {
        for category in Category::ALL {
            assert_eq!(
                category_spec(category).is_none(),
                category == Category::Other,
                "{category}"
            );
        }
    }

    #[test]
    fn test_spec_names_match_display_names() {
        for category in Category::ALL {
            if let Some(spec) = category_spec(category) {
                assert_eq!(spec.display_name, category.display_name());
                assert!(spec.enhancement_strategies.len() >= 4);
                assert!(spec.key_elements.len() >= 4);
            }
        }
    }

    #[test]
    fn test_action_phrase_ladders() {
        assert_eq!(action_phrase(Category::Creative, DetailLevel::Minimal), "Create");
        assert_eq!(
            action_phrase(Category::Code, DetailLevel::Expert),
            "Write, implement, optimize, and document"
        );
        assert_eq!(
            action_phrase(Category::Marketing, DetailLevel::Moderate),
            "Analyze and evaluate"
        );
    }
}
