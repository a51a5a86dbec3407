use serde::{Deserialize, Serialize};

use super::category::ExperienceCategory;

/// A technology or tool used in a professional experience.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TechnologyUsed {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A key achievement or responsibility within an experience.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Achievement {
    pub description: String,
    /// Quantifiable results ("Reduced build times by 40%").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    /// Technologies specific to this achievement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<TechnologyUsed>>,
}

/// Color pair for a timeline entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperienceTheme {
    pub primary: String,
    pub secondary: String,
}

/// A professional experience entry in the resume timeline.
///
/// `start_date` is an ISO `YYYY-MM-DD` string; `end_date` is either an
/// ISO date or the `Present` sentinel for ongoing positions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub category: ExperienceCategory,
    pub summary: String,
    pub achievements: Vec<Achievement>,
    pub technologies: Vec<TechnologyUsed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ExperienceTheme>,
}
