use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Metadata
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlogPostStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BlogCategory {
    Technology,
    Programming,
    WebDevelopment,
    ArtificialIntelligence,
    Career,
    Tutorials,
    Thoughts,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogTag {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoverImage {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BlogSeo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// Listing-level metadata for a post. `published_at` is an ISO date
/// string; `reading_time` is minutes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostMeta {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub author: Author,
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub category: BlogCategory,
    pub tags: Vec<BlogTag>,
    pub reading_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<CoverImage>,
    pub status: BlogPostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<BlogSeo>,
}

//
// ──────────────────────────────────────────────────────────
// Content sections
// ──────────────────────────────────────────────────────────
//

/// One typed block of post content. The discriminant mirrors the
/// section renderers the site ships.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlogPostSection {
    Text {
        id: String,
        content: String,
    },
    Code {
        id: String,
        content: String,
        language: String,
    },
    Image {
        id: String,
        /// Image URL.
        content: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Quote {
        id: String,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    List {
        id: String,
        content: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        ordered: Option<bool>,
    },
    Heading {
        id: String,
        content: String,
        level: u8,
    },
}

impl BlogPostSection {
    pub fn id(&self) -> &str {
        match self {
            BlogPostSection::Text { id, .. }
            | BlogPostSection::Code { id, .. }
            | BlogPostSection::Image { id, .. }
            | BlogPostSection::Quote { id, .. }
            | BlogPostSection::List { id, .. }
            | BlogPostSection::Heading { id, .. } => id,
        }
    }
}

/// Position of a post inside a named series; `order` is 1-based and
/// never exceeds `total` in valid content.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub slug: String,
    pub order: u32,
    pub total: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(flatten)]
    pub meta: BlogPostMeta,
    pub content: Vec<BlogPostSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_posts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
}

/// Listing projection with a plain-text excerpt.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPreview {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub published_at: String,
    pub category: BlogCategory,
    pub tags: Vec<BlogTag>,
    pub reading_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<CoverImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    pub excerpt: String,
}

impl BlogPost {
    /// First text section, trimmed for listings; falls back to the
    /// description when a post opens with something else.
    pub fn preview(&self) -> BlogPostPreview {
        let excerpt = self
            .content
            .iter()
            .find_map(|section| match section {
                BlogPostSection::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .unwrap_or_else(|| self.meta.description.clone());

        BlogPostPreview {
            title: self.meta.title.clone(),
            slug: self.meta.slug.clone(),
            description: self.meta.description.clone(),
            published_at: self.meta.published_at.clone(),
            category: self.meta.category,
            tags: self.meta.tags.clone(),
            reading_time: self.meta.reading_time,
            cover_image: self.meta.cover_image.clone(),
            featured: self.meta.featured,
            excerpt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_round_trip_with_a_type_tag() {
        let section = BlogPostSection::Code {
            id: "section-0".to_string(),
            content: "fn main() {}".to_string(),
            language: "rust".to_string(),
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "code");
        assert_eq!(json["language"], "rust");
        let back: BlogPostSection = serde_json::from_value(json).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn preview_takes_the_first_text_section_as_excerpt() {
        let post = BlogPost {
            meta: BlogPostMeta {
                title: "T".to_string(),
                slug: "t".to_string(),
                description: "Fallback".to_string(),
                author: Author {
                    name: "A".to_string(),
                    avatar: None,
                },
                published_at: "2024-01-01".to_string(),
                updated_at: None,
                category: BlogCategory::Thoughts,
                tags: vec![],
                reading_time: 2,
                cover_image: None,
                status: BlogPostStatus::Draft,
                featured: None,
                seo: None,
            },
            content: vec![
                BlogPostSection::Heading {
                    id: "h".to_string(),
                    content: "Heading".to_string(),
                    level: 1,
                },
                BlogPostSection::Text {
                    id: "t".to_string(),
                    content: "Opening words.".to_string(),
                },
            ],
            related_posts: None,
            series: None,
        };
        assert_eq!(post.preview().excerpt, "Opening words.");

        let mut without_text = post.clone();
        without_text.content.truncate(1);
        assert_eq!(without_text.preview().excerpt, "Fallback");
    }

    #[test]
    fn categories_serialize_kebab_case() {
        let json = serde_json::to_string(&BlogCategory::WebDevelopment).unwrap();
        assert_eq!(json, "\"web-development\"");
        let json = serde_json::to_string(&BlogCategory::ArtificialIntelligence).unwrap();
        assert_eq!(json, "\"artificial-intelligence\"");
    }
}
