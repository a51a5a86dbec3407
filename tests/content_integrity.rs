//! Build-time integrity checks over the bundled static content: every
//! record must pass its validator, and the metadata tables must stay
//! total and unambiguous.

use maplit::hashset;
use std::collections::HashSet;

use portfolio_core::blog::application::validation::validate_blog_post;
use portfolio_core::config::SiteConfig;
use portfolio_core::content::{ContentSource, StaticContent};
use portfolio_core::experience::application::validation::validate_experience;
use portfolio_core::experience::domain::category::ExperienceCategory;
use portfolio_core::modules::blog::application::feed::build_feeds;
use portfolio_core::modules::project::application::filters::{
    filter_projects, unique_technologies, ProjectFilter, ProjectFilterOptions,
};
use portfolio_core::modules::skill::data::categories::skill_categories;
use portfolio_core::modules::skill::data::icons::skill_icon;
use portfolio_core::project::application::validation::validate_projects;
use portfolio_core::skill::domain::entities::SkillLevel;

fn content() -> StaticContent {
    StaticContent::default()
}

// =====================================================
// Bundled content passes validation
// =====================================================

#[test]
fn bundled_experiences_are_valid() {
    for experience in content().experiences() {
        let errors = validate_experience(experience);
        assert!(
            errors.is_empty(),
            "experience '{}' has findings: {:?}",
            experience.id,
            errors
        );
    }
}

#[test]
fn bundled_projects_are_valid() {
    let errors = validate_projects(content().projects());
    assert!(errors.is_empty(), "project findings: {:?}", errors);
}

#[test]
fn bundled_posts_are_valid() {
    for post in content().posts() {
        let errors = validate_blog_post(post);
        assert!(
            errors.is_empty(),
            "post '{}' has findings: {:?}",
            post.meta.slug,
            errors
        );
    }
}

#[test]
fn bundled_skills_reference_known_categories_and_icons() {
    let category_ids: HashSet<&str> = skill_categories()
        .iter()
        .map(|category| category.id.as_str())
        .collect();
    for skill in content().skills() {
        assert!(
            category_ids.contains(skill.category_id.as_str()),
            "skill '{}' points at unknown category '{}'",
            skill.id,
            skill.category_id
        );
        assert!(
            skill_icon(&skill.icon).is_some(),
            "skill '{}' has no icon entry",
            skill.id
        );
    }
}

// =====================================================
// Table invariants
// =====================================================

#[test]
fn metadata_tables_are_total_and_unambiguous() {
    let priorities: HashSet<u8> = ExperienceCategory::ALL
        .iter()
        .map(|category| category.info().priority)
        .collect();
    assert_eq!(priorities.len(), ExperienceCategory::ALL.len());

    let orders: HashSet<u8> = skill_categories()
        .iter()
        .map(|category| category.order)
        .collect();
    assert_eq!(orders.len(), skill_categories().len());

    let values: Vec<u8> = SkillLevel::ALL.iter().map(|l| l.info().value).collect();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}

// =====================================================
// Cross-cutting scenarios
// =====================================================

#[test]
fn category_filter_and_unique_technologies_scenario() {
    let content = content();
    let result = filter_projects(
        content.projects(),
        &ProjectFilterOptions {
            filter: ProjectFilter {
                category: Some("Web Development".to_string()),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    assert_eq!(result.results.len(), 2);
    assert!(result
        .results
        .iter()
        .all(|project| project.category == "Web Development"));

    let technologies: HashSet<String> =
        unique_technologies(content.projects()).into_iter().collect();
    assert_eq!(
        technologies,
        hashset! {
            "React".to_string(),
            "Rust".to_string(),
            "TypeScript".to_string(),
        }
    );
}

#[test]
fn feeds_cover_every_bundled_post() {
    let content = content();
    let config = SiteConfig::default();
    let feeds = build_feeds(&config, content.posts());
    for post in content.posts() {
        let url = config.post_url(&post.meta.slug);
        assert!(feeds.rss.contains(&url), "rss feed misses {}", url);
        assert!(feeds.atom.contains(&url), "atom feed misses {}", url);
        assert!(feeds.json.contains(&url), "json feed misses {}", url);
    }
}
