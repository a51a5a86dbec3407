use crate::modules::experience::domain::entities::{Achievement, ExperienceEntry, TechnologyUsed};
use crate::shared::dates::{parse_flexible_date, PRESENT};
use crate::shared::validation::{is_valid_css_color, is_valid_url};

//
// ──────────────────────────────────────────────────────────
// Validators
// ──────────────────────────────────────────────────────────
//
// Every validator collects all findings into human-readable strings;
// an empty list means valid. Nothing here throws: malformed content is
// exactly what these functions describe.
//

pub fn validate_technology(tech: &TechnologyUsed) -> Vec<String> {
    let mut errors = Vec::new();

    if tech.id.trim().is_empty() {
        errors.push("Technology ID is required".to_string());
    }
    if tech.name.trim().is_empty() {
        errors.push("Technology name is required".to_string());
    }
    if let Some(url) = &tech.url {
        if !is_valid_url(url) {
            errors.push("Technology URL must be a valid URL".to_string());
        }
    }

    errors
}

pub fn validate_achievement(achievement: &Achievement) -> Vec<String> {
    let mut errors = Vec::new();

    if achievement.description.trim().is_empty() {
        errors.push("Achievement description is required".to_string());
    }

    if let Some(metrics) = &achievement.metrics {
        if metrics.iter().any(|metric| metric.trim().is_empty()) {
            errors.push("All metrics must have content".to_string());
        }
    }

    if let Some(technologies) = &achievement.technologies {
        for (index, tech) in technologies.iter().enumerate() {
            for error in validate_technology(tech) {
                errors.push(format!("Technology {}: {}", index + 1, error));
            }
        }
    }

    errors
}

pub fn validate_experience(experience: &ExperienceEntry) -> Vec<String> {
    let mut errors = Vec::new();

    // Required fields
    if experience.id.trim().is_empty() {
        errors.push("Experience ID is required".to_string());
    }
    if experience.company.trim().is_empty() {
        errors.push("Company name is required".to_string());
    }
    if experience.title.trim().is_empty() {
        errors.push("Job title is required".to_string());
    }
    if experience.start_date.trim().is_empty() {
        errors.push("Start date is required".to_string());
    }
    if experience.end_date.trim().is_empty() {
        errors.push("End date is required".to_string());
    }
    if experience.location.trim().is_empty() {
        errors.push("Location is required".to_string());
    }
    if experience.summary.trim().is_empty() {
        errors.push("Summary is required".to_string());
    }

    // Dates. The ordering check only runs once both ends parsed; an
    // unparseable date already has its own finding.
    let start = parse_flexible_date(&experience.start_date);
    if start.is_none() {
        errors.push("Start date must be a valid date".to_string());
    }
    let end = if experience.end_date == PRESENT {
        None
    } else {
        let parsed = parse_flexible_date(&experience.end_date);
        if parsed.is_none() {
            errors.push("End date must be a valid date or \"Present\"".to_string());
        }
        parsed
    };
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            errors.push("Start date cannot be after end date".to_string());
        }
    }

    // URLs
    if let Some(logo_url) = &experience.logo_url {
        if !is_valid_url(logo_url) {
            errors.push("Logo URL must be a valid URL".to_string());
        }
    }
    if let Some(company_url) = &experience.company_url {
        if !is_valid_url(company_url) {
            errors.push("Company URL must be a valid URL".to_string());
        }
    }

    // Nested records, labeled so findings can be attributed
    for (index, achievement) in experience.achievements.iter().enumerate() {
        for error in validate_achievement(achievement) {
            errors.push(format!("Achievement {}: {}", index + 1, error));
        }
    }
    for (index, tech) in experience.technologies.iter().enumerate() {
        for error in validate_technology(tech) {
            errors.push(format!("Technology {}: {}", index + 1, error));
        }
    }

    // Theme
    if let Some(theme) = &experience.theme {
        if theme.primary.trim().is_empty() {
            errors.push("Theme primary color is required when theme is provided".to_string());
        } else if !is_valid_css_color(&theme.primary) {
            errors.push("Theme primary must be a valid color value".to_string());
        }
        if theme.secondary.trim().is_empty() {
            errors.push("Theme secondary color is required when theme is provided".to_string());
        } else if !is_valid_css_color(&theme.secondary) {
            errors.push("Theme secondary must be a valid color value".to_string());
        }
    }

    errors
}
