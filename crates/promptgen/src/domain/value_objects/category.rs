//! Category - Kind of content the prompt asks for

use serde::{Deserialize, Serialize};

/// Prompt category
///
/// `Other` is the catch-all for ids the catalog does not know about. It has
/// no category spec, so every category-dependent clause is skipped for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Creative,
    Code,
    Analysis,
    Image,
    Business,
    Education,
    Marketing,
    Research,
    ProblemSolving,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Creative,
        Category::Code,
        Category::Analysis,
        Category::Image,
        Category::Business,
        Category::Education,
        Category::Marketing,
        Category::Research,
        Category::ProblemSolving,
        Category::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Creative => "creative",
            Category::Code => "code",
            Category::Analysis => "analysis",
            Category::Image => "image",
            Category::Business => "business",
            Category::Education => "education",
            Category::Marketing => "marketing",
            Category::Research => "research",
            Category::ProblemSolving => "problem-solving",
            Category::Other => "other",
        }
    }

    /// Resolve an id, falling back to `other` for unknown input
    pub fn from_id_lossy(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    /// Label used by the results view and the download artifact
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Creative => "Creative Writing",
            Category::Code => "Code Generation",
            Category::Analysis => "Data Analysis",
            Category::Image => "Image Generation",
            Category::Business => "Business Strategy",
            Category::Education => "Educational Content",
            Category::Marketing => "Marketing Copy",
            Category::Research => "Research & Analysis",
            Category::ProblemSolving => "Problem Solving",
            Category::Other => "General",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creative" => Ok(Category::Creative),
            "code" => Ok(Category::Code),
            "analysis" => Ok(Category::Analysis),
            "image" => Ok(Category::Image),
            "business" => Ok(Category::Business),
            "education" => Ok(Category::Education),
            "marketing" => Ok(Category::Marketing),
            "research" => Ok(Category::Research),
            "problem-solving" => Ok(Category::ProblemSolving),
            "other" => Ok(Category::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl From<String> for Category {
    fn from(id: String) -> Self {
        Category::from_id_lossy(&id)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_is_other() {
        assert_eq!(Category::from_id_lossy("poetry"), Category::Other);
        assert_eq!(Category::from_id_lossy("poetry").display_name(), "General");
    }

    #[test]
    fn test_ids_are_exact() {
        assert!("Code".parse::<Category>().is_err());
        assert_eq!(Category::from_id_lossy(" code "), Category::Other);
    }
}
