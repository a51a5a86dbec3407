use serde::{Deserialize, Serialize};
use std::env;

//
// ──────────────────────────────────────────────────────────
// Site configuration
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteAuthor {
    pub name: String,
    pub email: String,
    pub url: String,
}

/// Site-wide settings used by the feed builder and the content check
/// binary. Defaults describe the bundled demo content; every field can
/// be overridden from the environment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub site_url: String,
    pub author: SiteAuthor,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Software Engineer Portfolio".to_string(),
            description: "Personal website and blog of a software engineer writing about \
                          systems, web development, and technology."
                .to_string(),
            site_url: "https://example.com".to_string(),
            author: SiteAuthor {
                name: "Jordan Doe".to_string(),
                email: "contact@example.com".to_string(),
                url: "https://example.com".to_string(),
            },
        }
    }
}

impl SiteConfig {
    /// Builds the config from defaults plus `SITE_*` environment
    /// overrides. Callers load `.env` first if they want one.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(title) = env::var("SITE_TITLE") {
            config.title = title;
        }
        if let Ok(description) = env::var("SITE_DESCRIPTION") {
            config.description = description;
        }
        if let Ok(site_url) = env::var("SITE_URL") {
            config.site_url = site_url;
        }
        if let Ok(name) = env::var("SITE_AUTHOR_NAME") {
            config.author.name = name;
        }
        if let Ok(email) = env::var("SITE_AUTHOR_EMAIL") {
            config.author.email = email;
        }
        if let Ok(url) = env::var("SITE_AUTHOR_URL") {
            config.author.url = url;
        }
        config
    }

    pub fn feed_url(&self) -> String {
        format!("{}/rss.xml", self.site_url)
    }

    pub fn atom_url(&self) -> String {
        format!("{}/atom.xml", self.site_url)
    }

    pub fn json_feed_url(&self) -> String {
        format!("{}/feed.json", self.site_url)
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{}", self.site_url, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_urls_hang_off_the_site_url() {
        let config = SiteConfig::default();
        assert_eq!(config.feed_url(), "https://example.com/rss.xml");
        assert_eq!(config.atom_url(), "https://example.com/atom.xml");
        assert_eq!(config.json_feed_url(), "https://example.com/feed.json");
        assert_eq!(
            config.post_url("hello-world"),
            "https://example.com/blog/hello-world"
        );
    }
}
