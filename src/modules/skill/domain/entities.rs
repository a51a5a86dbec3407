use serde::{Deserialize, Serialize};

/// Light/dark color pair used across skill display metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ColorPair {
    pub light: String,
    pub dark: String,
}

impl ColorPair {
    pub fn new(light: &str, dark: &str) -> Self {
        Self {
            light: light.to_string(),
            dark: dark.to_string(),
        }
    }
}

/// Proficiency, ordinal from beginner to expert.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A grouping of skills ("Frontend Development", ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: String,
    pub color: ColorPair,
    /// Display rank; lower appears first. Pairwise unique.
    pub order: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An individual skill. `related_skills` and `projects` hold weak id
/// references: dangling ids are tolerated and resolved by lookup, never
/// by direct ownership.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub icon: String,
    pub level: SkillLevel,
    pub years_of_experience: f64,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
}
