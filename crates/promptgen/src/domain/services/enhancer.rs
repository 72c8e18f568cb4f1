//! Prompt Enhancer
//!
//! Assembles the enhanced prompt from the static catalog. Each section is
//! gated by the complexity level's `section_count`, so a higher level always
//! emits a superset of a lower level's sections, in the same order.

use serde::Serialize;

use crate::domain::{
    action_phrase, analyze_prompt, category_spec, complexity_spec, model_spec, AiModel, Category,
    CategorySpec, ComplexityLevel, ComplexitySpec, ContextDepth, DetailLevel, ModelSpec,
    PromptAnalysis, PromptRequest,
};

/// Separator placed between rendered sections
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Every section the enhancer can emit, in output order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    SystemInstructions,
    PrimaryTask,
    ContextRequirements,
    CategoryGuidelines,
    ModelOptimizations,
    QualitySpecifications,
    StructureFormat,
    AdvancedSpecifications,
    ExamplesConstraints,
    SuccessCriteria,
    OptimizationStrategies,
    TechnicalSpecifications,
    CodeRequirements,
}

impl SectionKind {
    /// The eleven level-gated sections
    pub const ORDERED: [SectionKind; 11] = [
        SectionKind::SystemInstructions,
        SectionKind::PrimaryTask,
        SectionKind::ContextRequirements,
        SectionKind::CategoryGuidelines,
        SectionKind::ModelOptimizations,
        SectionKind::QualitySpecifications,
        SectionKind::StructureFormat,
        SectionKind::AdvancedSpecifications,
        SectionKind::ExamplesConstraints,
        SectionKind::SuccessCriteria,
        SectionKind::OptimizationStrategies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionKind::SystemInstructions => "System Instructions",
            SectionKind::PrimaryTask => "Primary Task",
            SectionKind::ContextRequirements => "Context & Requirements",
            SectionKind::CategoryGuidelines => "Category-Specific Guidelines",
            SectionKind::ModelOptimizations => "Model Optimizations",
            SectionKind::QualitySpecifications => "Quality Specifications",
            SectionKind::StructureFormat => "Structure & Format",
            SectionKind::AdvancedSpecifications => "Advanced Specifications",
            SectionKind::ExamplesConstraints => "Examples & Constraints",
            SectionKind::SuccessCriteria => "Success Criteria",
            SectionKind::OptimizationStrategies => "Optimization Strategies",
            SectionKind::TechnicalSpecifications => "Technical Specifications",
            SectionKind::CodeRequirements => "Code Requirements",
        }
    }

    /// Smallest `section_count` at which the section is emitted.
    ///
    /// Zero means always (the two leading sections and the appendices).
    pub fn min_section_count(self) -> u8 {
        match self {
            SectionKind::SystemInstructions
            | SectionKind::PrimaryTask
            | SectionKind::TechnicalSpecifications
            | SectionKind::CodeRequirements => 0,
            SectionKind::ContextRequirements
            | SectionKind::ModelOptimizations
            | SectionKind::StructureFormat => 3,
            SectionKind::CategoryGuidelines | SectionKind::QualitySpecifications => 4,
            SectionKind::AdvancedSpecifications | SectionKind::ExamplesConstraints => 6,
            SectionKind::SuccessCriteria | SectionKind::OptimizationStrategies => 8,
        }
    }
}

/// One labelled block of the enhanced prompt
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromptSection {
    pub kind: SectionKind,
    pub body: String,
}

impl PromptSection {
    fn new(kind: SectionKind, body: String) -> Self {
        Self { kind, body }
    }

    pub fn render(&self) -> String {
        format!("**{}:** {}", self.kind.label(), self.body)
    }
}

/// Resolved lookups shared by the section builders
struct Blueprint<'a> {
    original: &'a str,
    model: AiModel,
    model_spec: &'static ModelSpec,
    category: Category,
    category_spec: Option<&'static CategorySpec>,
    complexity: &'static ComplexitySpec,
    analysis: PromptAnalysis,
}

impl<'a> Blueprint<'a> {
    fn new(original: &'a str, model: AiModel, category: Category, level: ComplexityLevel) -> Self {
        Self {
            original,
            model,
            model_spec: model_spec(model),
            category,
            category_spec: category_spec(category),
            complexity: complexity_spec(level),
            analysis: analyze_prompt(original),
        }
    }

    fn detail(&self) -> DetailLevel {
        self.complexity.detail_level
    }

    fn allows(&self, kind: SectionKind) -> bool {
        self.complexity.section_count >= kind.min_section_count()
    }

    fn sections(&self) -> Vec<PromptSection> {
        let mut sections = vec![
            PromptSection::new(
                SectionKind::SystemInstructions,
                self.model_spec.prompt_prefix.to_string(),
            ),
            PromptSection::new(SectionKind::PrimaryTask, self.primary_task()),
        ];

        if self.allows(SectionKind::ContextRequirements) {
            sections.push(PromptSection::new(
                SectionKind::ContextRequirements,
                self.context_requirements(),
            ));
        }

        if self.allows(SectionKind::CategoryGuidelines) {
            if let Some(spec) = self.category_spec {
                sections.push(PromptSection::new(
                    SectionKind::CategoryGuidelines,
                    self.category_guidelines(spec),
                ));
            }
        }

        if self.allows(SectionKind::ModelOptimizations) {
            sections.push(PromptSection::new(
                SectionKind::ModelOptimizations,
                self.model_optimizations(),
            ));
        }

        if self.allows(SectionKind::QualitySpecifications) {
            sections.push(PromptSection::new(
                SectionKind::QualitySpecifications,
                self.quality_specifications(),
            ));
        }

        if self.allows(SectionKind::StructureFormat) {
            sections.push(PromptSection::new(
                SectionKind::StructureFormat,
                self.structure_format(),
            ));
        }

        if self.allows(SectionKind::AdvancedSpecifications) {
            sections.push(PromptSection::new(
                SectionKind::AdvancedSpecifications,
                self.advanced_specifications(),
            ));
        }

        if self.allows(SectionKind::ExamplesConstraints) && self.complexity.examples_enabled {
            sections.push(PromptSection::new(
                SectionKind::ExamplesConstraints,
                self.examples_constraints(),
            ));
        }

        if self.allows(SectionKind::SuccessCriteria) {
            sections.push(PromptSection::new(
                SectionKind::SuccessCriteria,
                self.success_criteria(),
            ));
        }

        if self.allows(SectionKind::OptimizationStrategies) {
            sections.push(PromptSection::new(
                SectionKind::OptimizationStrategies,
                self.optimization_strategies(),
            ));
        }

        if self.model.is_image_generator() {
            sections.push(PromptSection::new(
                SectionKind::TechnicalSpecifications,
                "Include aspect ratio, quality settings, and style parameters as needed."
                    .to_string(),
            ));
        }

        if self.category == Category::Code {
            sections.push(PromptSection::new(
                SectionKind::CodeRequirements,
                "Include proper comments, error handling, testing considerations, and follow industry best practices."
                    .to_string(),
            ));
        }

        sections
    }

    fn category_name(spec: &CategorySpec) -> String {
        spec.display_name.to_lowercase()
    }

    fn primary_task(&self) -> String {
        let detail = self.detail();
        let mut task = self.original.to_string();

        if !self.analysis.has_action && self.category_spec.is_some() {
            task = format!("{} {}", action_phrase(self.category, detail), task);
        }

        if detail >= DetailLevel::Comprehensive {
            task.push_str(
                ". Ensure the output meets professional standards and includes comprehensive detail.",
            );
        }
        if detail.is_expert_or_above() {
            task.push_str(
                " Consider edge cases, alternative approaches, and provide reasoning for your methodology.",
            );
        }
        if detail == DetailLevel::Exhaustive {
            task.push_str(
                " Include thorough analysis, multiple perspectives, validation criteria, and optimization recommendations.",
            );
        }

        task
    }

    fn context_requirements(&self) -> String {
        let depth = self.complexity.context_depth;
        let mut parts = vec![match depth {
            ContextDepth::Basic => {
                "Provide necessary background information and key requirements.".to_string()
            }
            ContextDepth::Moderate => "Establish comprehensive context including background, requirements, constraints, and success metrics.".to_string(),
            ContextDepth::Detailed => "Establish comprehensive context including detailed background, stakeholder perspectives, technical requirements, business constraints, and measurable success metrics.".to_string(),
            ContextDepth::Comprehensive => "Provide exhaustive contextual framework including historical background, stakeholder analysis, technical specifications, business requirements, regulatory considerations, and comprehensive success metrics.".to_string(),
            ContextDepth::Exhaustive => "Establish complete contextual ecosystem including historical analysis, comprehensive stakeholder mapping, detailed technical architecture, business impact assessment, regulatory compliance framework, risk analysis, and multi-dimensional success criteria.".to_string(),
        }];

        if let Some(spec) = self.category_spec {
            if depth != ContextDepth::Basic {
                parts.push(format!(
                    "Consider {} domain-specific factors and industry standards.",
                    Self::category_name(spec)
                ));
            }
        }

        parts.join(" ")
    }

    fn category_guidelines(&self, spec: &CategorySpec) -> String {
        let detail = self.detail();

        let strategies = match detail {
            DetailLevel::Minimal => leading(spec.enhancement_strategies, 2),
            DetailLevel::Moderate => leading(spec.enhancement_strategies, 3),
            DetailLevel::Comprehensive => leading(spec.enhancement_strategies, 4),
            _ => spec.enhancement_strategies.join(", "),
        };
        let elements = match detail {
            DetailLevel::Minimal => leading(spec.key_elements, 3),
            DetailLevel::Moderate => leading(spec.key_elements, 4),
            _ => spec.key_elements.join(", "),
        };

        let mut parts = vec![
            format!("Key strategies: {}.", strategies),
            format!("Essential elements to address: {}.", elements),
        ];

        if detail.is_expert_or_above() {
            parts.push(format!(
                "Apply professional {} methodologies and industry standards.",
                Self::category_name(spec)
            ));
        }

        parts.join(" ")
    }

    fn model_optimizations(&self) -> String {
        let detail = self.detail();
        let features = self.model_spec.key_features;
        let model = self.model.id();

        let mut parts = vec![match detail {
            DetailLevel::Minimal => {
                format!("Basic optimization for {}: {}.", model, leading(features, 1))
            }
            DetailLevel::Moderate => {
                format!("Enhanced optimization for {}: {}.", model, leading(features, 2))
            }
            _ => format!("Advanced optimization for {}: {}.", model, features.join(", ")),
        }];

        if detail.is_expert_or_above() {
            parts.push(
                "Leverage model-specific capabilities for maximum efficiency and accuracy."
                    .to_string(),
            );
            parts.push(
                "Implement advanced prompting techniques and structured reasoning approaches."
                    .to_string(),
            );
        }
        if detail == DetailLevel::Exhaustive {
            parts.push(
                "Utilize cutting-edge prompt engineering methodologies and meta-cognitive frameworks."
                    .to_string(),
            );
        }

        parts.join(" ")
    }

    fn quality_specifications(&self) -> String {
        let detail = self.detail();
        let (min, max) = self.complexity.word_range;

        let mut parts = vec![
            format!(
                "Target word range: {}-{} words for optimal {} level detail.",
                min,
                max,
                self.complexity.display_name.to_lowercase()
            ),
            match detail {
                DetailLevel::Minimal => "Quality requirements: Clear, concise, and accurate information.",
                DetailLevel::Moderate => "Quality requirements: Professional standard with clear communication and practical insights.",
                DetailLevel::Comprehensive => "Quality requirements: High professional standard with comprehensive analysis and actionable insights.",
                DetailLevel::Expert => "Quality requirements: Expert-level professional standard with detailed analysis, comprehensive insights, and industry best practices.",
                DetailLevel::Exhaustive => "Quality requirements: Master-level professional standard with exhaustive analysis, comprehensive insights, research-grade documentation, and cutting-edge methodologies.",
            }
            .to_string(),
        ];

        if let Some(spec) = self.category_spec {
            let focus = match detail {
                DetailLevel::Minimal => leading(spec.key_elements, 2),
                DetailLevel::Moderate => leading(spec.key_elements, 3),
                _ => spec.key_elements.join(", "),
            };
            parts.push(format!("Category quality focus: Excellence in {}.", focus));
        }

        if detail.is_expert_or_above() {
            parts.push("Validation requirements: Peer-review quality, evidence-based conclusions, and comprehensive error checking.".to_string());
        }

        parts.join(" ")
    }

    fn structure_format(&self) -> String {
        let detail = self.detail();

        let mut parts = vec![match detail {
            DetailLevel::Minimal => "Use clear, concise structure with essential sections only.",
            DetailLevel::Moderate => "Organize content with logical flow, clear headers, and structured sections.",
            DetailLevel::Comprehensive => "Implement comprehensive structure with detailed sections, subsections, and clear hierarchical organization.",
            DetailLevel::Expert => "Use professional document structure with executive summary, detailed analysis, recommendations, and appendices.",
            DetailLevel::Exhaustive => "Implement research-paper quality structure with abstract, methodology, analysis, findings, recommendations, limitations, and comprehensive references.",
        }
        .to_string()];

        if detail != DetailLevel::Minimal {
            parts.push(format!(
                "Format according to {} best practices: {}.",
                self.model.id(),
                self.model_spec.response_format
            ));
        }

        parts.join(" ")
    }

    fn advanced_specifications(&self) -> String {
        let detail = self.detail();

        let mut parts = vec!["Advanced requirements: Implement sophisticated reasoning, multi-step analysis, and comprehensive validation.".to_string()];

        if detail == DetailLevel::Expert {
            parts.push("Expert-level considerations: Include domain expertise, professional standards, and industry best practices.".to_string());
        }
        if detail == DetailLevel::Exhaustive {
            parts.push("Master-level specifications: Comprehensive analysis, alternative approaches, edge case handling, and optimization recommendations.".to_string());
            parts.push("Research-grade output: Include methodology justification, comparative analysis, and peer-review quality standards.".to_string());
        }

        if let Some(spec) = self.category_spec {
            parts.push(format!(
                "Advanced {} considerations: {}.",
                Self::category_name(spec),
                leading(spec.enhancement_strategies, 3)
            ));
        }

        parts.join(" ")
    }

    fn examples_constraints(&self) -> String {
        let detail = self.detail();
        let mut parts = Vec::new();

        if detail.is_expert_or_above() {
            parts.push(
                "Provide multiple examples demonstrating different approaches and methodologies."
                    .to_string(),
            );
            parts.push("Include both positive examples (what to do) and negative examples (what to avoid).".to_string());

            if let Some(spec) = self.category_spec {
                parts.push(format!(
                    "Examples should showcase mastery of {}.",
                    leading(spec.key_elements, 3)
                ));
            }
        }

        if detail == DetailLevel::Exhaustive {
            parts.push("Include edge cases, alternative scenarios, and comparative analysis of different approaches.".to_string());
            parts.push("Provide detailed step-by-step breakdowns for complex examples.".to_string());
        }

        parts.join(" ")
    }

    fn success_criteria(&self) -> String {
        let mut parts = vec![
            format!(
                "Master-level output meeting {} standards.",
                self.complexity.display_name.to_lowercase()
            ),
            "Comprehensive coverage of all specified requirements.".to_string(),
            "Professional quality suitable for expert use.".to_string(),
            "Actionable, practical, and immediately implementable results.".to_string(),
        ];

        if let Some(spec) = self.category_spec {
            parts.push(format!(
                "Excellence in all {} key elements: {}.",
                spec.key_elements.len(),
                spec.key_elements.join(", ")
            ));
        }

        parts.join(" ")
    }

    fn optimization_strategies(&self) -> String {
        let mut parts = vec![
            "Performance optimization: Prioritize efficiency, accuracy, and scalability in all outputs.".to_string(),
            "Quality assurance: Implement validation checks, peer review considerations, and iterative improvement processes.".to_string(),
            format!("Format optimization: {}", self.model_spec.response_format),
            "Continuous improvement: Consider feedback mechanisms, version control, and documentation standards.".to_string(),
        ];

        if let Some(spec) = self.category_spec {
            parts.push(format!(
                "Domain expertise: Leverage advanced {} methodologies and industry best practices.",
                Self::category_name(spec)
            ));
        }

        parts.join(" ")
    }
}

/// First `n` items joined with `", "`
fn leading(items: &[&str], n: usize) -> String {
    items[..n.min(items.len())].join(", ")
}

/// Build the ordered sections for a validated request
pub fn build_sections(request: &PromptRequest) -> Vec<PromptSection> {
    Blueprint::new(
        &request.original_text,
        request.model,
        request.category,
        request.complexity,
    )
    .sections()
}

/// Enhance a validated request
pub fn enhance(request: &PromptRequest) -> String {
    render(&build_sections(request))
}

/// Enhance from raw ids.
///
/// Unknown model ids resolve to `general`, unknown category ids skip every
/// category clause, and levels outside `1..=5` use level 3. Never fails.
pub fn generate(original: &str, model_id: &str, category_id: &str, level: i64) -> String {
    let sections = Blueprint::new(
        original,
        AiModel::from_id_lossy(model_id),
        Category::from_id_lossy(category_id),
        ComplexityLevel::from_raw_lossy(level),
    )
    .sections();

    render(&sections)
}

fn render(sections: &[PromptSection]) -> String {
    sections
        .iter()
        .map(PromptSection::render)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const DRAGON: &str = "Write a story about a dragon who learns to fly";

    fn kinds(original: &str, model: &str, category: &str, level: i64) -> Vec<SectionKind> {
        Blueprint::new(
            original,
            AiModel::from_id_lossy(model),
            Category::from_id_lossy(category),
            ComplexityLevel::from_raw_lossy(level),
        )
        .sections()
        .into_iter()
        .map(|s| s.kind)
        .collect()
    }

    #[rstest]
    #[case(1, 2)]
    #[case(2, 5)]
    #[case(3, 7)]
    #[case(4, 9)]
    #[case(5, 11)]
    fn test_section_count_per_level(#[case] level: i64, #[case] expected: usize) {
        let emitted = kinds(DRAGON, "general", "creative", level);
        assert_eq!(emitted.len(), expected);

        let threshold = complexity_spec(ComplexityLevel::from_raw_lossy(level)).section_count;
        let gated = SectionKind::ORDERED
            .iter()
            .filter(|k| k.min_section_count() > 0 && k.min_section_count() <= threshold)
            .count();
        assert_eq!(emitted.len(), 2 + gated);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    fn test_higher_levels_are_supersets(#[case] level: i64) {
        let lower = kinds(DRAGON, "claude", "research", level);
        let higher = kinds(DRAGON, "claude", "research", (level + 1).min(5));
        assert!(lower.iter().all(|k| higher.contains(k)));

        // Output order always follows the declared order
        let positions: Vec<usize> = higher
            .iter()
            .map(|k| SectionKind::ORDERED.iter().position(|o| o == k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_level_one_scenario() {
        let enhanced = generate(DRAGON, "general", "creative", 1);
        assert_eq!(
            enhanced,
            "**System Instructions:** Provide a comprehensive and helpful response.\n\n\
             **Primary Task:** Write a story about a dragon who learns to fly"
        );
        assert!(!enhanced.contains("Context & Requirements"));
    }

    #[test]
    fn test_level_five_scenario() {
        let emitted = kinds(DRAGON, "general", "creative", 5);
        assert!(emitted.contains(&SectionKind::SuccessCriteria));
        assert!(emitted.contains(&SectionKind::OptimizationStrategies));
        assert_eq!(emitted.last(), Some(&SectionKind::OptimizationStrategies));

        let enhanced = generate(DRAGON, "general", "creative", 5);
        assert!(enhanced.contains("**Success Criteria:** Master-level output meeting master standards."));
        assert!(enhanced.contains(
            "Excellence in all 6 key elements: narrative voice, genre, tone, style, character development, plot structure."
        ));
    }

    #[rstest]
    #[case("gpt-9")]
    #[case("")]
    #[case("GENERAL-ish")]
    #[case("Claude")]
    #[case(" claude ")]
    fn test_unknown_model_matches_general(#[case] model: &str) {
        for level in 1..=5 {
            assert_eq!(
                generate(DRAGON, model, "code", level),
                generate(DRAGON, "general", "code", level)
            );
        }
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(9)]
    #[case(-2)]
    fn test_out_of_range_level_renders_as_level_three(#[case] level: i64) {
        assert_eq!(
            generate(DRAGON, "claude", "creative", level),
            generate(DRAGON, "claude", "creative", 3)
        );
        assert_eq!(
            generate(DRAGON, "copilot", "code", level),
            generate(DRAGON, "copilot", "code", 3)
        );
    }

    #[test]
    fn test_unknown_category_drops_category_clauses() {
        let text = "a limerick about compilers and coffee";
        for level in 1..=5 {
            let enhanced = generate(text, "claude", "poetry", level);

            assert!(!enhanced.contains("Category-Specific Guidelines"));
            assert!(!enhanced.contains("Excellence in"));
            assert!(!enhanced.contains("domain-specific factors"));
            assert!(!enhanced.contains("Domain expertise"));
            assert!(!enhanced.contains("showcase mastery"));
            assert!(enhanced.contains(&format!("**Primary Task:** {}", text)));

            if level >= 2 {
                assert!(enhanced.contains("optimization for claude:"));
                assert!(enhanced.contains("**Structure & Format:**"));
            }
            if level >= 3 {
                assert!(enhanced.contains("Target word range:"));
            }
        }
    }

    #[test]
    fn test_midjourney_appendix_at_every_level() {
        for level in 1..=5 {
            let enhanced = generate(DRAGON, "midjourney", "image", level);
            assert!(enhanced.ends_with(
                "**Technical Specifications:** Include aspect ratio, quality settings, and style parameters as needed."
            ));
        }
    }

    #[test]
    fn test_code_appendix_at_every_level() {
        for model in ["copilot", "general", "dalle"] {
            for level in 1..=5 {
                let enhanced = generate("Implement a binary search tree", model, "code", level);
                assert!(enhanced.contains(
                    "**Code Requirements:** Include proper comments, error handling, testing considerations, and follow industry best practices."
                ));
            }
        }
    }

    #[test]
    fn test_action_phrase_prepended_when_missing() {
        let enhanced = generate("a poem about autumn leaves", "general", "creative", 2);
        assert!(enhanced.contains("**Primary Task:** Create and develop a poem about autumn leaves"));

        let enhanced = generate("a sorting routine for tuples", "general", "code", 1);
        assert!(enhanced.contains("**Primary Task:** Write a sorting routine for tuples"));

        let enhanced = generate("quarterly churn for our app", "general", "business", 1);
        assert!(enhanced.contains("**Primary Task:** Analyze quarterly churn for our app"));

        // No category spec: no verb
        let enhanced = generate("quarterly churn for our app", "general", "other", 1);
        assert!(enhanced.contains("**Primary Task:** quarterly churn for our app"));
    }

    #[test]
    fn test_trailing_task_clauses() {
        let enhanced = generate(DRAGON, "general", "creative", 4);
        assert!(enhanced.contains(
            "fly. Ensure the output meets professional standards and includes comprehensive detail. Consider edge cases, alternative approaches, and provide reasoning for your methodology.\n\n"
        ));
    }

    #[test]
    fn test_model_optimization_tiers() {
        let level2 = generate(DRAGON, "chatgpt", "creative", 2);
        assert!(level2.contains(
            "**Model Optimizations:** Enhanced optimization for chatgpt: structured responses, detailed explanations."
        ));

        let level3 = generate(DRAGON, "chatgpt", "creative", 3);
        assert!(level3.contains(
            "Advanced optimization for chatgpt: structured responses, detailed explanations, step-by-step reasoning."
        ));
    }

    #[test]
    fn test_enhance_matches_generate() {
        let request = PromptRequest {
            original_text: DRAGON.to_string(),
            model: AiModel::Gemini,
            category: Category::Education,
            complexity: ComplexityLevel::new(4).unwrap(),
        };
        assert_eq!(enhance(&request), generate(DRAGON, "gemini", "education", 4));
    }
}
