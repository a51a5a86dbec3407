use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Value records
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyType {
    Framework,
    Language,
    Database,
    Tool,
    Platform,
    Other,
}

/// A technology in a project's stack.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Technology {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TechnologyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Technology {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: None,
            url: None,
            color: None,
            kind: None,
            description: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Github,
    Demo,
    Docs,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: LinkType,
    pub url: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A screenshot or illustration; at most one per project is `featured`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_data_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub challenge: String,
    pub solution: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SeoMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// A portfolio project. `date` is an ISO `YYYY-MM-DD` string; `order`
/// is required whenever `featured` is set (enforced by validation).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub images: Vec<ProjectImage>,
    pub technologies: Vec<Technology>,
    pub links: Vec<ProjectLink>,
    pub date: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<Challenge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}
