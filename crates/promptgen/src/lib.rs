//! promptgen Domain Library
//!
//! Core types and logic for turning a short user prompt into a structured,
//! model-aware "enhanced" prompt.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: PromptForm, PromptRequest, EnhancedPromptResult, StatsRecord
//!   - `value_objects/`: AiModel, Category, ComplexityLevel
//!   - `catalog/`: Static model, category and complexity tables
//!   - `services/`: Prompt analysis, the enhancer, results report
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Stats and session result storage
//!   - `services/`: Read-only stats seed
//!
//! - **Application** (`application/`): Use cases (stats store, form
//!   submission, results view)
//!
//! - **Adapters** (`adapters/`): In-memory and JSON file implementations of
//!   the ports, shared by the server and the CLI
//!
//! # Usage
//!
//! ```rust
//! use promptgen::generate;
//!
//! let enhanced = generate("Write a story about a dragon who learns to fly", "general", "creative", 1);
//! assert!(enhanced.starts_with("**System Instructions:**"));
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    analyze_prompt, category_spec, complexity_spec, enhance, generate, model_spec, AiModel,
    Category, CategorySpec, ComplexityLevel, ComplexitySpec, ContextDepth, DetailLevel,
    DomainError, EnhancedPromptResult, ModelSpec, PromptAnalysis, PromptAnalytics, PromptForm,
    PromptRequest, PromptSection, SectionKind, StatsRecord, ValidationError,
};
pub use ports::{ResultRepository, StatsRepository, StatsSeedSource};
