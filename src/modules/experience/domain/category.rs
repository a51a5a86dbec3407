use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

//
// ──────────────────────────────────────────────────────────
// Categories
// ──────────────────────────────────────────────────────────
//

/// The kind of engagement an experience entry represents.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceCategory {
    FullTime,
    Contract,
    Freelance,
    Internship,
    Education,
    Volunteer,
    Project,
    Certification,
}

/// Display metadata for an experience category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInfo {
    pub label: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    /// Display rank; lower values appear first. Pairwise unique.
    pub priority: u8,
}

fn info(label: &str, description: &str, color: &str, icon: &str, priority: u8) -> CategoryInfo {
    CategoryInfo {
        label: label.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        priority,
    }
}

// Indexed by the enum discriminant; keep in declaration order.
static CATEGORY_METADATA: LazyLock<[CategoryInfo; 8]> = LazyLock::new(|| {
    [
        info(
            "Full-time",
            "Full-time professional positions",
            "#2563eb",
            "briefcase",
            1,
        ),
        info(
            "Contract",
            "Contract-based positions",
            "#7c3aed",
            "document-text",
            2,
        ),
        info(
            "Freelance",
            "Independent freelance work",
            "#059669",
            "code",
            3,
        ),
        info(
            "Internship",
            "Professional internships",
            "#0891b2",
            "academic-cap",
            4,
        ),
        info(
            "Education",
            "Academic education and training",
            "#db2777",
            "book-open",
            5,
        ),
        info(
            "Volunteer",
            "Volunteer work and contributions",
            "#ea580c",
            "heart",
            6,
        ),
        info(
            "Project",
            "Personal or team projects",
            "#4f46e5",
            "puzzle",
            7,
        ),
        info(
            "Certification",
            "Professional certifications",
            "#0d9488",
            "badge-check",
            8,
        ),
    ]
});

impl ExperienceCategory {
    pub const ALL: [ExperienceCategory; 8] = [
        ExperienceCategory::FullTime,
        ExperienceCategory::Contract,
        ExperienceCategory::Freelance,
        ExperienceCategory::Internship,
        ExperienceCategory::Education,
        ExperienceCategory::Volunteer,
        ExperienceCategory::Project,
        ExperienceCategory::Certification,
    ];

    /// Display metadata for this category. Total over the enum, O(1).
    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORY_METADATA[self as usize]
    }

    pub fn label(self) -> &'static str {
        &self.info().label
    }
}

/// All categories ordered by their declared display priority.
pub fn sorted_categories() -> Vec<ExperienceCategory> {
    let mut categories = ExperienceCategory::ALL.to_vec();
    categories.sort_by_key(|c| c.info().priority);
    categories
}
