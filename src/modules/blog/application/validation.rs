use regex::Regex;
use std::sync::LazyLock;

use crate::modules::blog::domain::entities::{BlogPost, BlogPostMeta, BlogPostSection};
use crate::shared::dates::parse_flexible_date;
use crate::shared::validation;

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static pattern"));

//
// ──────────────────────────────────────────────────────────
// Field checks
// ──────────────────────────────────────────────────────────
//

/// Lowercase alphanumeric runs joined by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG.is_match(slug)
}

pub fn is_valid_date(date: &str) -> bool {
    parse_flexible_date(date).is_some()
}

/// Reading time in minutes; nobody publishes an hour-long read here.
pub fn is_valid_reading_time(minutes: u32) -> bool {
    minutes > 0 && minutes < 60
}

pub fn is_valid_url(url: &str) -> bool {
    validation::is_valid_url(url)
}

//
// ──────────────────────────────────────────────────────────
// Record validators
// ──────────────────────────────────────────────────────────
//

pub fn validate_blog_post_meta(meta: &BlogPostMeta) -> Vec<String> {
    let mut errors = Vec::new();

    if meta.title.is_empty() {
        errors.push("Title is required".to_string());
    }
    if meta.slug.is_empty() {
        errors.push("Slug is required".to_string());
    } else if !is_valid_slug(&meta.slug) {
        errors.push("Invalid slug format".to_string());
    }
    if meta.description.is_empty() {
        errors.push("Description is required".to_string());
    }
    if meta.author.name.is_empty() {
        errors.push("Author name is required".to_string());
    }
    if meta.published_at.is_empty() {
        errors.push("Published date is required".to_string());
    } else if !is_valid_date(&meta.published_at) {
        errors.push("Invalid published date".to_string());
    }
    if let Some(updated_at) = &meta.updated_at {
        if !is_valid_date(updated_at) {
            errors.push("Invalid updated date".to_string());
        }
    }
    if meta.tags.is_empty() {
        errors.push("At least one tag is required".to_string());
    }
    if !is_valid_reading_time(meta.reading_time) {
        errors.push("Invalid reading time".to_string());
    }
    if let Some(cover) = &meta.cover_image {
        if !is_valid_url(&cover.url) {
            errors.push("Invalid cover image URL".to_string());
        }
    }

    errors
}

pub fn validate_blog_post(post: &BlogPost) -> Vec<String> {
    let mut errors = validate_blog_post_meta(&post.meta);

    if post.content.is_empty() {
        errors.push("Blog post content is required".to_string());
    }

    for (index, section) in post.content.iter().enumerate() {
        if section.id().is_empty() {
            errors.push(format!("Section {} is missing an ID", index));
        }

        match section {
            BlogPostSection::Text { content, .. } => {
                if content.is_empty() {
                    errors.push(format!("Section {} is missing content", index));
                }
            }
            BlogPostSection::Code {
                content, language, ..
            } => {
                if content.is_empty() {
                    errors.push(format!("Section {} is missing content", index));
                }
                if language.trim().is_empty() {
                    errors.push(format!("Code section {} is missing a language", index));
                }
            }
            BlogPostSection::Image { content, alt, .. } => {
                if content.is_empty() {
                    errors.push(format!("Section {} is missing content", index));
                }
                if alt.is_empty() {
                    errors.push(format!("Image section {} is missing alt text", index));
                }
                if !content.is_empty() && !is_valid_url(content) {
                    errors.push(format!("Image section {} has invalid URL", index));
                }
            }
            BlogPostSection::Quote { content, .. } => {
                if content.is_empty() {
                    errors.push(format!("Section {} is missing content", index));
                }
            }
            BlogPostSection::List { content, .. } => {
                if content.is_empty() {
                    errors.push(format!("Section {} is missing content", index));
                }
            }
            BlogPostSection::Heading { content, level, .. } => {
                if content.is_empty() {
                    errors.push(format!("Section {} is missing content", index));
                }
                if *level < 1 || *level > 6 {
                    errors.push(format!("Heading section {} has invalid level", index));
                }
            }
        }
    }

    // Series cross-field checks only make sense on named series.
    if let Some(series) = &post.series {
        if series.name.is_empty() {
            errors.push("Series name is required".to_string());
        }
        if series.slug.is_empty() {
            errors.push("Series slug is required".to_string());
        }
        if series.order < 1 {
            errors.push("Invalid series order".to_string());
        } else if series.total < series.order {
            errors.push("Invalid series total".to_string());
        }
    }

    errors
}
