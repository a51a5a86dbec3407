use atom_syndication::{
    ContentBuilder, Entry, EntryBuilder, FeedBuilder, LinkBuilder, Person, Text,
};
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use serde_json::json;
use tracing::warn;

use crate::config::SiteConfig;
use crate::modules::blog::domain::entities::{BlogPost, BlogPostSection};
use crate::shared::dates::parse_flexible_date;

/// The three serialized feed documents the site publishes.
#[derive(Debug, Clone)]
pub struct FeedBundle {
    pub rss: String,
    pub atom: String,
    pub json: String,
}

//
// ──────────────────────────────────────────────────────────
// Section rendering
// ──────────────────────────────────────────────────────────
//

/// Renders one section the way the feed readers expect it, mirroring
/// the site's own section renderers.
fn section_html(section: &BlogPostSection) -> String {
    match section {
        BlogPostSection::Heading { content, level, .. } => {
            format!("<h{level}>{content}</h{level}>")
        }
        BlogPostSection::Text { content, .. } => format!("<p>{content}</p>"),
        BlogPostSection::Code {
            content, language, ..
        } => {
            format!("<pre><code class=\"language-{language}\">{content}</code></pre>")
        }
        BlogPostSection::Quote {
            content, author, ..
        } => match author {
            Some(author) => format!("<blockquote>{content}<cite>{author}</cite></blockquote>"),
            None => format!("<blockquote>{content}</blockquote>"),
        },
        BlogPostSection::List {
            content, ordered, ..
        } => {
            let tag = if ordered.unwrap_or(false) { "ol" } else { "ul" };
            let items: String = content
                .iter()
                .map(|item| format!("<li>{item}</li>"))
                .collect();
            format!("<{tag}>{items}</{tag}>")
        }
        BlogPostSection::Image {
            content,
            alt,
            caption,
            ..
        } => match caption {
            Some(caption) => format!("<img src=\"{content}\" alt=\"{alt}\" title=\"{caption}\" />"),
            None => format!("<img src=\"{content}\" alt=\"{alt}\" />"),
        },
    }
}

pub fn post_html(post: &BlogPost) -> String {
    post.content
        .iter()
        .map(section_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn published_at(post: &BlogPost) -> Option<DateTime<Utc>> {
    let date = parse_flexible_date(&post.meta.published_at)?;
    Some(DateTime::from_naive_utc_and_offset(
        date.and_time(NaiveTime::MIN),
        Utc,
    ))
}

//
// ──────────────────────────────────────────────────────────
// Builders
// ──────────────────────────────────────────────────────────
//

fn rss_item(config: &SiteConfig, post: &BlogPost, date: DateTime<Utc>) -> Item {
    let url = config.post_url(&post.meta.slug);
    let categories: Vec<rss::Category> = post
        .meta
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.name.clone()).build())
        .collect();

    ItemBuilder::default()
        .title(Some(post.meta.title.clone()))
        .link(Some(url.clone()))
        .guid(Some(
            GuidBuilder::default().value(url).permalink(true).build(),
        ))
        .description(Some(post.meta.description.clone()))
        .content(Some(post_html(post)))
        .author(Some(post.meta.author.name.clone()))
        .pub_date(Some(date.to_rfc2822()))
        .categories(categories)
        .build()
}

fn atom_entry(config: &SiteConfig, post: &BlogPost, date: DateTime<Utc>) -> Entry {
    let url = config.post_url(&post.meta.slug);

    EntryBuilder::default()
        .title(Text::plain(post.meta.title.clone()))
        .id(url.clone())
        .updated(date.fixed_offset())
        .links(vec![LinkBuilder::default().href(url).build()])
        .summary(Some(Text::plain(post.meta.description.clone())))
        .content(Some(
            ContentBuilder::default()
                .content_type(Some("html".to_string()))
                .value(Some(post_html(post)))
                .build(),
        ))
        .authors(vec![Person {
            name: post.meta.author.name.clone(),
            email: None,
            uri: Some(config.author.url.clone()),
            ..Default::default()
        }])
        .build()
}

fn json_item(config: &SiteConfig, post: &BlogPost, date: DateTime<Utc>) -> serde_json::Value {
    let url = config.post_url(&post.meta.slug);
    json!({
        "id": url,
        "url": url,
        "title": post.meta.title,
        "summary": post.meta.description,
        "content_html": post_html(post),
        "date_published": date.to_rfc3339(),
        "author": { "name": post.meta.author.name },
        "tags": post.meta.tags.iter().map(|tag| tag.name.clone()).collect::<Vec<_>>(),
    })
}

/// Builds RSS 2.0, Atom 1.0, and JSON Feed 1.0 documents from the
/// posts, newest first as given. Posts whose published date does not
/// parse are skipped with a warning: feed dates must serialize.
pub fn build_feeds(config: &SiteConfig, posts: &[BlogPost]) -> FeedBundle {
    let now = Utc::now();
    let copyright = format!("All rights reserved {}, {}", now.year(), config.author.name);

    let dated: Vec<(&BlogPost, DateTime<Utc>)> = posts
        .iter()
        .filter_map(|post| match published_at(post) {
            Some(date) => Some((post, date)),
            None => {
                warn!(slug = %post.meta.slug, "skipping post with unparseable published date");
                None
            }
        })
        .collect();

    let updated = dated.first().map(|(_, date)| *date).unwrap_or(now);

    let channel = ChannelBuilder::default()
        .title(config.title.clone())
        .link(config.site_url.clone())
        .description(config.description.clone())
        .language(Some("en".to_string()))
        .copyright(Some(copyright.clone()))
        .last_build_date(Some(updated.to_rfc2822()))
        .items(
            dated
                .iter()
                .map(|(post, date)| rss_item(config, post, *date))
                .collect::<Vec<_>>(),
        )
        .build();

    let atom_feed = FeedBuilder::default()
        .title(Text::plain(config.title.clone()))
        .id(config.site_url.clone())
        .subtitle(Some(Text::plain(config.description.clone())))
        .updated(updated.fixed_offset())
        .links(vec![
            LinkBuilder::default()
                .href(config.atom_url())
                .rel("self".to_string())
                .build(),
            LinkBuilder::default().href(config.site_url.clone()).build(),
        ])
        .authors(vec![Person {
            name: config.author.name.clone(),
            email: Some(config.author.email.clone()),
            uri: Some(config.author.url.clone()),
            ..Default::default()
        }])
        .rights(Some(Text::plain(copyright)))
        .entries(
            dated
                .iter()
                .map(|(post, date)| atom_entry(config, post, *date))
                .collect::<Vec<_>>(),
        )
        .build();

    let json_feed = json!({
        "version": "https://jsonfeed.org/version/1",
        "title": config.title,
        "home_page_url": config.site_url,
        "feed_url": config.json_feed_url(),
        "description": config.description,
        "author": {
            "name": config.author.name,
            "url": config.author.url,
        },
        "items": dated
            .iter()
            .map(|(post, date)| json_item(config, post, *date))
            .collect::<Vec<_>>(),
    });

    FeedBundle {
        rss: channel.to_string(),
        atom: atom_feed.to_string(),
        json: serde_json::to_string_pretty(&json_feed).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::domain::entities::{
        Author, BlogCategory, BlogPostMeta, BlogPostStatus, BlogTag,
    };

    /* --------------------------------------------------
     * Fixtures
     * -------------------------------------------------- */

    fn sample_post(slug: &str, published_at: &str) -> BlogPost {
        BlogPost {
            meta: BlogPostMeta {
                title: format!("Post {}", slug),
                slug: slug.to_string(),
                description: "A post".to_string(),
                author: Author {
                    name: "Jordan Doe".to_string(),
                    avatar: None,
                },
                published_at: published_at.to_string(),
                updated_at: None,
                category: BlogCategory::Programming,
                tags: vec![BlogTag {
                    id: "1".to_string(),
                    name: "Rust".to_string(),
                    slug: "rust".to_string(),
                }],
                reading_time: 3,
                cover_image: None,
                status: BlogPostStatus::Published,
                featured: None,
                seo: None,
            },
            content: vec![
                BlogPostSection::Heading {
                    id: "s0".to_string(),
                    content: "Intro".to_string(),
                    level: 2,
                },
                BlogPostSection::Text {
                    id: "s1".to_string(),
                    content: "Hello.".to_string(),
                },
            ],
            related_posts: None,
            series: None,
        }
    }

    /* --------------------------------------------------
     * Section rendering
     * -------------------------------------------------- */

    #[test]
    fn sections_render_their_html_shapes() {
        assert_eq!(
            section_html(&BlogPostSection::Heading {
                id: "s".to_string(),
                content: "Title".to_string(),
                level: 3,
            }),
            "<h3>Title</h3>"
        );
        assert_eq!(
            section_html(&BlogPostSection::Code {
                id: "s".to_string(),
                content: "fn main() {}".to_string(),
                language: "rust".to_string(),
            }),
            "<pre><code class=\"language-rust\">fn main() {}</code></pre>"
        );
        assert_eq!(
            section_html(&BlogPostSection::Quote {
                id: "s".to_string(),
                content: "Quoted".to_string(),
                author: Some("Someone".to_string()),
            }),
            "<blockquote>Quoted<cite>Someone</cite></blockquote>"
        );
        assert_eq!(
            section_html(&BlogPostSection::List {
                id: "s".to_string(),
                content: vec!["a".to_string(), "b".to_string()],
                ordered: Some(true),
            }),
            "<ol><li>a</li><li>b</li></ol>"
        );
        assert_eq!(
            section_html(&BlogPostSection::Image {
                id: "s".to_string(),
                content: "/img.png".to_string(),
                alt: "An image".to_string(),
                caption: Some("Cap".to_string()),
            }),
            "<img src=\"/img.png\" alt=\"An image\" title=\"Cap\" />"
        );
    }

    #[test]
    fn post_html_joins_sections_with_newlines() {
        let post = sample_post("hello", "2024-02-01");
        assert_eq!(post_html(&post), "<h2>Intro</h2>\n<p>Hello.</p>");
    }

    /* --------------------------------------------------
     * Feed building
     * -------------------------------------------------- */

    #[test]
    fn feeds_contain_every_published_post() {
        let config = SiteConfig::default();
        let posts = vec![
            sample_post("newest", "2024-03-01"),
            sample_post("older", "2024-01-01"),
        ];
        let bundle = build_feeds(&config, &posts);

        assert!(bundle.rss.contains("https://example.com/blog/newest"));
        assert!(bundle.rss.contains("https://example.com/blog/older"));
        assert!(bundle.atom.contains("https://example.com/blog/newest"));
        assert!(bundle.json.contains("https://example.com/blog/older"));
    }

    #[test]
    fn posts_with_bad_dates_are_skipped() {
        let config = SiteConfig::default();
        let posts = vec![
            sample_post("good", "2024-03-01"),
            sample_post("bad", "sometime in spring"),
        ];
        let bundle = build_feeds(&config, &posts);
        assert!(bundle.rss.contains("/blog/good"));
        assert!(!bundle.rss.contains("/blog/bad"));
    }

    #[test]
    fn rss_channel_carries_site_metadata() {
        let config = SiteConfig::default();
        let bundle = build_feeds(&config, &[sample_post("hello", "2024-02-01")]);
        assert!(bundle.rss.contains("<title>Software Engineer Portfolio</title>"));
        assert!(bundle.rss.contains("<language>en</language>"));
    }

    #[test]
    fn json_feed_declares_its_version() {
        let config = SiteConfig::default();
        let bundle = build_feeds(&config, &[]);
        let parsed: serde_json::Value = serde_json::from_str(&bundle.json).unwrap();
        assert_eq!(parsed["version"], "https://jsonfeed.org/version/1");
        assert_eq!(parsed["items"].as_array().unwrap().len(), 0);
    }
}
