use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::modules::project::domain::entities::{Project, ProjectStatus};
use crate::shared::dates::parse_flexible_date;

//
// ──────────────────────────────────────────────────────────
// Filter DTOs
// ──────────────────────────────────────────────────────────
//

/// Optional, AND-combined selection criteria. An absent criterion
/// passes everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFilter {
    /// Case-insensitive category match.
    pub category: Option<String>,
    /// Case-insensitive match against any technology name.
    pub technology: Option<String>,
    /// Exact status match.
    pub status: Option<ProjectStatus>,
    /// Exact featured-flag match.
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSortKey {
    /// Most recent first.
    Date,
    Title,
    /// Explicit `order` ascending; entries without one sort last.
    Order,
    Category,
}

impl Default for ProjectSortKey {
    fn default() -> Self {
        ProjectSortKey::Date
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectFilterOptions {
    pub filter: ProjectFilter,
    pub sort: ProjectSortKey,
    /// Page size; `None` disables pagination.
    pub limit: Option<usize>,
    /// Applied after filter+sort, defaults to 0.
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterResult<T> {
    pub results: Vec<T>,
    /// Count before pagination.
    pub total: usize,
    /// Echo of the criteria that were applied.
    pub applied: ProjectFilter,
}

//
// ──────────────────────────────────────────────────────────
// Filtering
// ──────────────────────────────────────────────────────────
//

fn matches_filter(project: &Project, filter: &ProjectFilter) -> bool {
    let category_match = filter
        .category
        .as_ref()
        .map_or(true, |category| project.category.eq_ignore_ascii_case(category));

    let technology_match = filter.technology.as_ref().map_or(true, |technology| {
        project
            .technologies
            .iter()
            .any(|tech| tech.name.eq_ignore_ascii_case(technology))
    });

    let status_match = filter
        .status
        .map_or(true, |status| project.status == Some(status));

    let featured_match = filter
        .featured
        .map_or(true, |featured| project.featured.unwrap_or(false) == featured);

    category_match && technology_match && status_match && featured_match
}

fn compare_by(sort: ProjectSortKey, a: &Project, b: &Project) -> Ordering {
    match sort {
        ProjectSortKey::Date => {
            match (parse_flexible_date(&a.date), parse_flexible_date(&b.date)) {
                (Some(da), Some(db)) => db.cmp(&da),
                // unparseable dates fall back to string order, reversed
                // to stay coherent with most-recent-first
                _ => b.date.cmp(&a.date),
            }
        }
        ProjectSortKey::Title => a.title.cmp(&b.title),
        ProjectSortKey::Category => a.category.cmp(&b.category),
        ProjectSortKey::Order => {
            let order_a = a.order.map(u64::from).unwrap_or(u64::MAX);
            let order_b = b.order.map(u64::from).unwrap_or(u64::MAX);
            order_a.cmp(&order_b)
        }
    }
}

/// Filters, sorts, and paginates a project collection.
///
/// The underlying sort is stable, so ties keep their original relative
/// position and repeated calls with the same criteria are idempotent.
/// `total` counts matches before pagination.
pub fn filter_projects(projects: &[Project], options: &ProjectFilterOptions) -> FilterResult<Project> {
    let mut filtered: Vec<Project> = projects
        .iter()
        .filter(|project| matches_filter(project, &options.filter))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| compare_by(options.sort, a, b));

    let total = filtered.len();
    let results = match options.limit {
        Some(limit) => filtered
            .into_iter()
            .skip(options.offset)
            .take(limit)
            .collect(),
        None => filtered,
    };

    FilterResult {
        results,
        total,
        applied: options.filter.clone(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Derived helpers
// ──────────────────────────────────────────────────────────
//

/// Featured projects sorted by their explicit `order`, optionally
/// capped. This is a narrower contract than [`filter_projects`]: a
/// featured project without an `order` (an authoring error that
/// validation reports) is treated as order 0.
pub fn featured_projects(projects: &[Project], limit: Option<usize>) -> Vec<Project> {
    let mut featured: Vec<Project> = projects
        .iter()
        .filter(|project| project.featured.unwrap_or(false))
        .cloned()
        .collect();
    featured.sort_by_key(|project| project.order.unwrap_or(0));

    match limit {
        Some(limit) => featured.into_iter().take(limit).collect(),
        None => featured,
    }
}

/// Scores every other project by affinity to `current`: +3 for the
/// same category, +1 per shared technology name (both exact matches),
/// and returns the top `limit` by score. Ties keep collection order;
/// zero-score projects may fill out the result.
pub fn related_projects(current: &Project, projects: &[Project], limit: usize) -> Vec<Project> {
    let mut scored: Vec<(usize, &Project)> = projects
        .iter()
        .filter(|project| project.id != current.id)
        .map(|project| {
            let mut score = 0;
            if project.category == current.category {
                score += 3;
            }
            score += project
                .technologies
                .iter()
                .filter(|tech| {
                    current
                        .technologies
                        .iter()
                        .any(|current_tech| current_tech.name == tech.name)
                })
                .count();
            (score, project)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, project)| project.clone())
        .collect()
}

/// Distinct categories, exact-match dedup, sorted ascending.
pub fn unique_categories(projects: &[Project]) -> Vec<String> {
    let mut categories: Vec<String> = projects
        .iter()
        .map(|project| project.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Distinct technology names, exact-match dedup, sorted ascending.
pub fn unique_technologies(projects: &[Project]) -> Vec<String> {
    let mut technologies: Vec<String> = projects
        .iter()
        .flat_map(|project| project.technologies.iter().map(|tech| tech.name.clone()))
        .collect();
    technologies.sort();
    technologies.dedup();
    technologies
}

/// Projects with the given status, in collection order.
pub fn projects_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.status == Some(status))
        .cloned()
        .collect()
}
