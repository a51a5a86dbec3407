use pulldown_cmark::{html, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Deserialize;

use crate::modules::blog::domain::entities::{
    Author, BlogCategory, BlogPost, BlogPostMeta, BlogPostSection, BlogPostStatus, BlogSeo,
    BlogTag, CoverImage, Series,
};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("Missing front matter block")]
    MissingFrontMatter,

    #[error("Invalid front matter: {0}")]
    InvalidFrontMatter(#[from] serde_yaml::Error),
}

//
// ──────────────────────────────────────────────────────────
// Front matter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    title: String,
    slug: String,
    description: String,
    author: Author,
    published_at: String,
    updated_at: Option<String>,
    category: BlogCategory,
    tags: Vec<BlogTag>,
    cover_image: Option<CoverImage>,
    status: BlogPostStatus,
    featured: Option<bool>,
    seo: Option<BlogSeo>,
    series: Option<Series>,
}

/// Splits a leading `---` fenced YAML block from the markdown body.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    for (index, _) in rest.match_indices("\n---") {
        let after = &rest[index + "\n---".len()..];
        let at_line_end = after.is_empty()
            || after.starts_with('\n')
            || after.starts_with("\r\n")
            || after.starts_with('\r');
        if at_line_end {
            let body = after.trim_start_matches(['\r', '\n']);
            return Some((&rest[..index], body));
        }
    }
    None
}

/// Minutes at a 200-words-per-minute pace, rounded up.
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count().max(1);
    ((words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE) as u32
}

//
// ──────────────────────────────────────────────────────────
// Section conversion
// ──────────────────────────────────────────────────────────
//

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

fn plain_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

fn render_html(events: Vec<Event>) -> String {
    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out.trim_end().to_string()
}

/// Walks the markdown token stream and maps each top-level block onto a
/// typed post section. Unrecognized blocks degrade to text sections
/// holding their rendered HTML, so no content is ever dropped.
pub fn markdown_to_sections(content: &str) -> Vec<BlogPostSection> {
    let mut sections: Vec<BlogPostSection> = Vec::new();
    let mut events = Parser::new_ext(content, parser_options());

    while let Some(event) = events.next() {
        match event {
            Event::Start(tag) => {
                let inner = collect_block(&mut events);
                let id = format!("section-{}", sections.len());
                sections.push(convert_block(id, tag, inner));
            }
            Event::Rule => {
                let id = format!("section-{}", sections.len());
                sections.push(BlogPostSection::Text {
                    id,
                    content: "<hr />".to_string(),
                });
            }
            Event::Html(raw) => {
                let id = format!("section-{}", sections.len());
                sections.push(BlogPostSection::Text {
                    id,
                    content: raw.trim_end().to_string(),
                });
            }
            _ => {}
        }
    }

    sections
}

/// Consumes events up to (and including) the end of the block opened
/// just before the call; returns everything in between.
fn collect_block<'a>(events: &mut Parser<'a>) -> Vec<Event<'a>> {
    let mut depth = 1usize;
    let mut inner = Vec::new();
    for event in events.by_ref() {
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        inner.push(event);
    }
    inner
}

fn heading_level(level: HeadingLevel) -> u8 {
    level as u8
}

fn convert_block(id: String, tag: Tag, inner: Vec<Event>) -> BlogPostSection {
    match tag {
        Tag::Heading { level, .. } => BlogPostSection::Heading {
            id,
            content: plain_text(&inner),
            level: heading_level(level),
        },
        Tag::CodeBlock(kind) => {
            let language = match &kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => lang.to_string(),
                _ => "plaintext".to_string(),
            };
            let content = plain_text(&inner);
            BlogPostSection::Code {
                id,
                content: content.trim_end_matches('\n').to_string(),
                language,
            }
        }
        Tag::Paragraph => convert_paragraph(id, inner),
        Tag::BlockQuote(_) => BlogPostSection::Quote {
            id,
            content: render_html(inner),
            author: None,
        },
        Tag::List(start) => BlogPostSection::List {
            id,
            content: list_items(inner),
            ordered: Some(start.is_some()),
        },
        other => {
            // table, html block, footnote: keep the rendered form
            let mut events = Vec::with_capacity(inner.len() + 2);
            let end = other.to_end();
            events.push(Event::Start(other));
            events.extend(inner);
            events.push(Event::End(end));
            BlogPostSection::Text {
                id,
                content: render_html(events),
            }
        }
    }
}

/// A paragraph that wraps a lone image becomes an image section.
fn convert_paragraph(id: String, inner: Vec<Event>) -> BlogPostSection {
    if let Some(Event::Start(Tag::Image {
        dest_url, title, ..
    })) = inner.first()
    {
        let image_only = matches!(inner.last(), Some(Event::End(TagEnd::Image)));
        if image_only {
            let alt_events = &inner[1..inner.len() - 1];
            return BlogPostSection::Image {
                id,
                content: dest_url.to_string(),
                alt: plain_text(alt_events),
                caption: if title.is_empty() {
                    None
                } else {
                    Some(title.to_string())
                },
            };
        }
    }
    BlogPostSection::Text {
        id,
        content: render_html(inner),
    }
}

/// Splits a list body into the plain text of each top-level item.
fn list_items(inner: Vec<Event>) -> Vec<String> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut current: Vec<Event> = Vec::new();

    for event in inner {
        match &event {
            Event::Start(Tag::Item) if depth == 0 => {
                depth = 1;
                current.clear();
            }
            Event::Start(_) => {
                depth += 1;
                current.push(event);
            }
            Event::End(TagEnd::Item) if depth == 1 => {
                depth = 0;
                items.push(plain_text(&current));
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                current.push(event);
            }
            _ => {
                if depth > 0 {
                    current.push(event);
                }
            }
        }
    }

    items
}

//
// ──────────────────────────────────────────────────────────
// Post assembly
// ──────────────────────────────────────────────────────────
//

/// Parses a frontmatter-bearing markdown document into a full post.
/// Reading time is always derived from the body, never trusted from
/// the front matter.
pub fn markdown_to_blog_post(content: &str) -> Result<BlogPost, MarkdownError> {
    let (front_matter, body) =
        split_front_matter(content).ok_or(MarkdownError::MissingFrontMatter)?;
    let front: FrontMatter = serde_yaml::from_str(front_matter)?;

    let meta = BlogPostMeta {
        title: front.title,
        slug: front.slug,
        description: front.description,
        author: front.author,
        published_at: front.published_at,
        updated_at: front.updated_at,
        category: front.category,
        tags: front.tags,
        reading_time: reading_time(body),
        cover_image: front.cover_image,
        status: front.status,
        featured: front.featured,
        seo: front.seo,
    };

    Ok(BlogPost {
        meta,
        content: markdown_to_sections(body),
        related_posts: None,
        series: front.series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DOC: &str = "---\n\
title: Getting Started with Rust\n\
slug: getting-started-with-rust\n\
description: A short guide\n\
author:\n  name: Jordan Doe\n\
publishedAt: \"2024-02-26\"\n\
category: programming\n\
tags:\n  - id: \"1\"\n    name: Rust\n    slug: rust\n\
status: published\n\
---\n\
# Introduction\n\
\n\
Rust is a systems language.\n\
\n\
```rust\nfn main() {}\n```\n";

    // =====================================================
    // Front matter
    // =====================================================

    #[test]
    fn parses_front_matter_into_meta() {
        let post = markdown_to_blog_post(SAMPLE_DOC).unwrap();
        assert_eq!(post.meta.title, "Getting Started with Rust");
        assert_eq!(post.meta.slug, "getting-started-with-rust");
        assert_eq!(post.meta.category, BlogCategory::Programming);
        assert_eq!(post.meta.status, BlogPostStatus::Published);
        assert_eq!(post.meta.reading_time, 1);
    }

    #[test]
    fn missing_front_matter_is_an_error() {
        let result = markdown_to_blog_post("# Just a heading\n");
        assert!(matches!(result, Err(MarkdownError::MissingFrontMatter)));
    }

    #[test]
    fn malformed_front_matter_is_an_error() {
        let doc = "---\ntitle: [unterminated\n---\nBody\n";
        assert!(matches!(
            markdown_to_blog_post(doc),
            Err(MarkdownError::InvalidFrontMatter(_))
        ));
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time("word"), 1);
        let two_minutes = "word ".repeat(201);
        assert_eq!(reading_time(&two_minutes), 2);
        assert_eq!(reading_time(""), 1);
    }

    // =====================================================
    // Sections
    // =====================================================

    #[test]
    fn headings_keep_their_level() {
        let sections = markdown_to_sections("## Setup\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0],
            BlogPostSection::Heading {
                id: "section-0".to_string(),
                content: "Setup".to_string(),
                level: 2,
            }
        );
    }

    #[test]
    fn fenced_code_keeps_language() {
        let sections = markdown_to_sections("```rust\nfn main() {}\n```\n");
        match &sections[0] {
            BlogPostSection::Code {
                content, language, ..
            } => {
                assert_eq!(language, "rust");
                assert_eq!(content, "fn main() {}");
            }
            other => panic!("expected code section, got {:?}", other),
        }
    }

    #[test]
    fn unlabeled_code_defaults_to_plaintext() {
        let sections = markdown_to_sections("```\nplain\n```\n");
        match &sections[0] {
            BlogPostSection::Code { language, .. } => assert_eq!(language, "plaintext"),
            other => panic!("expected code section, got {:?}", other),
        }
    }

    #[test]
    fn lone_image_paragraph_becomes_an_image_section() {
        let sections =
            markdown_to_sections("![A diagram](/images/diagram.png \"The caption\")\n");
        assert_eq!(
            sections[0],
            BlogPostSection::Image {
                id: "section-0".to_string(),
                content: "/images/diagram.png".to_string(),
                alt: "A diagram".to_string(),
                caption: Some("The caption".to_string()),
            }
        );
    }

    #[test]
    fn paragraphs_become_text_sections() {
        let sections = markdown_to_sections("Plain *styled* words.\n");
        match &sections[0] {
            BlogPostSection::Text { content, .. } => {
                assert!(content.contains("<em>styled</em>"));
            }
            other => panic!("expected text section, got {:?}", other),
        }
    }

    #[test]
    fn blockquotes_become_quote_sections() {
        let sections = markdown_to_sections("> Wise words here.\n");
        match &sections[0] {
            BlogPostSection::Quote { content, author, .. } => {
                assert!(content.contains("Wise words here."));
                assert!(author.is_none());
            }
            other => panic!("expected quote section, got {:?}", other),
        }
    }

    #[test]
    fn lists_carry_items_and_orderedness() {
        let sections = markdown_to_sections("1. first\n2. second\n");
        assert_eq!(
            sections[0],
            BlogPostSection::List {
                id: "section-0".to_string(),
                content: vec!["first".to_string(), "second".to_string()],
                ordered: Some(true),
            }
        );

        let sections = markdown_to_sections("- alpha\n- beta\n");
        match &sections[0] {
            BlogPostSection::List { ordered, content, .. } => {
                assert_eq!(*ordered, Some(false));
                assert_eq!(content, &vec!["alpha".to_string(), "beta".to_string()]);
            }
            other => panic!("expected list section, got {:?}", other),
        }
    }

    #[test]
    fn section_ids_are_sequential() {
        let doc = "# One\n\ntext\n\n> quote\n";
        let sections = markdown_to_sections(doc);
        let ids: Vec<&str> = sections.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["section-0", "section-1", "section-2"]);
    }

    #[test]
    fn full_document_produces_expected_section_kinds() {
        let post = markdown_to_blog_post(SAMPLE_DOC).unwrap();
        assert_eq!(post.content.len(), 3);
        assert!(matches!(post.content[0], BlogPostSection::Heading { .. }));
        assert!(matches!(post.content[1], BlogPostSection::Text { .. }));
        assert!(matches!(post.content[2], BlogPostSection::Code { .. }));
    }
}
