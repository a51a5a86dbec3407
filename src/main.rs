use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_core::blog::application::feed::build_feeds;
use portfolio_core::blog::application::validation::validate_blog_post;
use portfolio_core::blog::domain::entities::BlogPostStatus;
use portfolio_core::config::SiteConfig;
use portfolio_core::content::{ContentSource, StaticContent};
use portfolio_core::experience::application::validation::validate_experience;
use portfolio_core::project::application::validation::validate_projects;

/// Validates the bundled content and writes the syndication feeds.
/// This is the build step the site runs before publishing.
#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    let content = StaticContent::default();

    let mut findings: Vec<String> = Vec::new();

    for experience in content.experiences() {
        for finding in validate_experience(experience) {
            findings.push(format!("Experience '{}': {}", experience.id, finding));
        }
    }
    findings.extend(validate_projects(content.projects()));
    for post in content.posts() {
        for finding in validate_blog_post(post) {
            findings.push(format!("Post '{}': {}", post.meta.slug, finding));
        }
    }

    if !findings.is_empty() {
        for finding in &findings {
            error!("{}", finding);
        }
        bail!("content check failed with {} finding(s)", findings.len());
    }
    info!(
        experiences = content.experiences().len(),
        skills = content.skills().len(),
        projects = content.projects().len(),
        posts = content.posts().len(),
        "content check passed"
    );

    let published: Vec<_> = content
        .posts()
        .iter()
        .filter(|post| post.meta.status == BlogPostStatus::Published)
        .cloned()
        .collect();
    let feeds = build_feeds(&config, &published);

    let out_dir = PathBuf::from(env::var("FEED_OUT_DIR").unwrap_or_else(|_| "dist".to_string()));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    fs::write(out_dir.join("rss.xml"), &feeds.rss).context("writing rss.xml")?;
    fs::write(out_dir.join("atom.xml"), &feeds.atom).context("writing atom.xml")?;
    fs::write(out_dir.join("feed.json"), &feeds.json).context("writing feed.json")?;

    info!(dir = %out_dir.display(), "feeds written");
    Ok(())
}
