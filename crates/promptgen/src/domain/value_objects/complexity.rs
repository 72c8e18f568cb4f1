//! Complexity - Slider level and the tiers derived from it

use serde::{Deserialize, Serialize};

/// Complexity slider position, always within `1..=5`
///
/// Out-of-range values coming from the wire resolve to the default level 3.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "i64", into = "u8")]
pub struct ComplexityLevel(u8);

impl ComplexityLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 3;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&level)
            .then_some(Self(level))
    }

    /// Clamp-free conversion: anything outside `1..=5` becomes level 3
    pub fn from_raw_lossy(level: i64) -> Self {
        u8::try_from(level)
            .ok()
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn all() -> impl Iterator<Item = ComplexityLevel> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for ComplexityLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ComplexityLevel {
    fn from(level: i64) -> Self {
        ComplexityLevel::from_raw_lossy(level)
    }
}

impl From<ComplexityLevel> for u8 {
    fn from(level: ComplexityLevel) -> Self {
        level.0
    }
}

/// How much detail each generated clause carries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Minimal,
    Moderate,
    Comprehensive,
    Expert,
    Exhaustive,
}

impl DetailLevel {
    /// Expert and exhaustive tiers share most of their extra sentences
    pub fn is_expert_or_above(self) -> bool {
        self >= DetailLevel::Expert
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailLevel::Minimal => write!(f, "minimal"),
            DetailLevel::Moderate => write!(f, "moderate"),
            DetailLevel::Comprehensive => write!(f, "comprehensive"),
            DetailLevel::Expert => write!(f, "expert"),
            DetailLevel::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// Depth of the context & requirements section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ContextDepth {
    Basic,
    Moderate,
    Detailed,
    Comprehensive,
    Exhaustive,
}

impl std::fmt::Display for ContextDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextDepth::Basic => write!(f, "basic"),
            ContextDepth::Moderate => write!(f, "moderate"),
            ContextDepth::Detailed => write!(f, "detailed"),
            ContextDepth::Comprehensive => write!(f, "comprehensive"),
            ContextDepth::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_falls_back_to_three() {
        assert_eq!(ComplexityLevel::from_raw_lossy(0).value(), 3);
        assert_eq!(ComplexityLevel::from_raw_lossy(6).value(), 3);
        assert_eq!(ComplexityLevel::from_raw_lossy(-1).value(), 3);
        assert_eq!(ComplexityLevel::from_raw_lossy(5).value(), 5);
    }

    #[test]
    fn test_serde_as_number() {
        let level = ComplexityLevel::new(4).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "4");

        let parsed: ComplexityLevel = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, ComplexityLevel::default());
    }

    #[test]
    fn test_all_levels() {
        let levels: Vec<u8> = ComplexityLevel::all().map(|l| l.value()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }
}
