use regex::Regex;
use std::sync::LazyLock;

use crate::modules::project::domain::entities::{Project, ProjectImage, ProjectLink, Technology};
use crate::shared::validation::{is_valid_hex_color, is_valid_url};

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static pattern"));

//
// ──────────────────────────────────────────────────────────
// Nested validators
// ──────────────────────────────────────────────────────────
//

pub fn validate_project_technology(tech: &Technology) -> Vec<String> {
    let mut errors = Vec::new();

    if tech.name.trim().is_empty() {
        errors.push("Technology name is required".to_string());
    }
    if let Some(icon) = &tech.icon {
        if icon.contains('/') && !is_valid_url(icon) {
            errors.push("Invalid icon URL".to_string());
        }
    }
    if let Some(url) = &tech.url {
        if !is_valid_url(url) {
            errors.push("Invalid documentation URL".to_string());
        }
    }
    if let Some(color) = &tech.color {
        if !is_valid_hex_color(color) {
            errors.push("Invalid color hex code".to_string());
        }
    }

    errors
}

pub fn validate_project_link(link: &ProjectLink) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_valid_url(&link.url) {
        errors.push("Invalid URL format".to_string());
    }
    if link.label.trim().is_empty() {
        errors.push("Link label is required".to_string());
    }

    errors
}

pub fn validate_project_image(image: &ProjectImage) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_valid_url(&image.src) {
        errors.push("Invalid image URL".to_string());
    }
    if image.alt.trim().is_empty() {
        errors.push("Alt text is required for accessibility".to_string());
    }
    if let Some(blur) = &image.blur_data_url {
        if !blur.starts_with("data:image/") {
            errors.push("Blur data URL must be a valid image data URL".to_string());
        }
    }

    errors
}

//
// ──────────────────────────────────────────────────────────
// Project validator
// ──────────────────────────────────────────────────────────
//

/// Collects every authoring problem in a project record. Bounds come
/// from the site's content schema; the cross-field rule is that a
/// featured project must carry an explicit display order.
pub fn validate_project(project: &Project) -> Vec<String> {
    let mut errors = Vec::new();

    if project.id.trim().is_empty() {
        errors.push("Project ID is required".to_string());
    }
    if project.title.trim().is_empty() {
        errors.push("Project title is required".to_string());
    } else if project.title.chars().count() > 100 {
        errors.push("Project title too long".to_string());
    }

    let summary_len = project.summary.chars().count();
    if summary_len < 10 {
        errors.push("Summary too short".to_string());
    } else if summary_len > 200 {
        errors.push("Summary too long".to_string());
    }

    let description_len = project.description.chars().count();
    if description_len < 50 {
        errors.push("Description too short".to_string());
    } else if description_len > 5000 {
        errors.push("Description too long".to_string());
    }

    if project.images.is_empty() {
        errors.push("At least one project image is required".to_string());
    } else if project.images.len() > 10 {
        errors.push("Maximum 10 images allowed".to_string());
    }
    for (index, image) in project.images.iter().enumerate() {
        for error in validate_project_image(image) {
            errors.push(format!("Image {}: {}", index + 1, error));
        }
    }
    let featured_images = project
        .images
        .iter()
        .filter(|image| image.featured.unwrap_or(false))
        .count();
    if featured_images > 1 {
        errors.push("At most one image may be featured".to_string());
    }

    if project.technologies.is_empty() {
        errors.push("At least one technology is required".to_string());
    }
    for (index, tech) in project.technologies.iter().enumerate() {
        for error in validate_project_technology(tech) {
            errors.push(format!("Technology {}: {}", index + 1, error));
        }
    }

    if project.links.is_empty() {
        errors.push("At least one project link is required".to_string());
    }
    for (index, link) in project.links.iter().enumerate() {
        for error in validate_project_link(link) {
            errors.push(format!("Link {}: {}", index + 1, error));
        }
    }

    if !ISO_DATE.is_match(&project.date) {
        errors.push("Date must be in YYYY-MM-DD format".to_string());
    }

    if project.category.trim().is_empty() {
        errors.push("Project category is required".to_string());
    }

    if let Some(highlights) = &project.highlights {
        if highlights.len() > 10 {
            errors.push("Maximum 10 highlights allowed".to_string());
        }
    }

    if let Some(challenges) = &project.challenges {
        if challenges.len() > 5 {
            errors.push("Maximum 5 challenges allowed".to_string());
        }
        for (index, challenge) in challenges.iter().enumerate() {
            if challenge.challenge.trim().is_empty() {
                errors.push(format!(
                    "Challenge {}: Challenge description is required",
                    index + 1
                ));
            }
            if challenge.solution.trim().is_empty() {
                errors.push(format!(
                    "Challenge {}: Solution description is required",
                    index + 1
                ));
            }
        }
    }

    if let Some(seo) = &project.seo {
        if let Some(title) = &seo.title {
            if title.chars().count() > 60 {
                errors.push("SEO title should be under 60 characters".to_string());
            }
        }
        if let Some(description) = &seo.description {
            if description.chars().count() > 160 {
                errors.push("SEO description should be under 160 characters".to_string());
            }
        }
        if let Some(keywords) = &seo.keywords {
            if keywords.len() > 10 {
                errors.push("Maximum 10 keywords allowed".to_string());
            }
        }
    }

    // Cross-field: a featured project needs a stable display slot.
    if project.featured.unwrap_or(false) && project.order.is_none() {
        errors.push("Featured projects must have an order number".to_string());
    }

    errors
}

/// Validates a whole collection, labeling findings with the offending
/// project's id.
pub fn validate_projects(projects: &[Project]) -> Vec<String> {
    let mut errors = Vec::new();
    for project in projects {
        for error in validate_project(project) {
            errors.push(format!("Project '{}': {}", project.id, error));
        }
    }
    errors
}
