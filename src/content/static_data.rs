use crate::modules::blog::domain::entities::{
    Author, BlogCategory, BlogPost, BlogPostMeta, BlogPostSection, BlogPostStatus, BlogTag,
    CoverImage,
};
use crate::modules::experience::domain::category::ExperienceCategory;
use crate::modules::experience::domain::entities::{
    Achievement, ExperienceEntry, ExperienceTheme, TechnologyUsed,
};
use crate::modules::project::domain::entities::{
    LinkType, Project, ProjectImage, ProjectLink, ProjectStatus, Technology,
};
use crate::modules::skill::domain::entities::{Skill, SkillLevel};

use super::source::ContentSource;

/// The site's bundled content, defined once at startup. Nothing here
/// mutates after construction.
pub struct StaticContent {
    experiences: Vec<ExperienceEntry>,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    posts: Vec<BlogPost>,
}

impl Default for StaticContent {
    fn default() -> Self {
        Self {
            experiences: experiences(),
            skills: skills(),
            projects: projects(),
            posts: posts(),
        }
    }
}

impl ContentSource for StaticContent {
    fn experiences(&self) -> &[ExperienceEntry] {
        &self.experiences
    }

    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn posts(&self) -> &[BlogPost] {
        &self.posts
    }
}

//
// ──────────────────────────────────────────────────────────
// Experiences
// ──────────────────────────────────────────────────────────
//

fn tech(id: &str, name: &str, url: &str) -> TechnologyUsed {
    TechnologyUsed {
        id: id.to_string(),
        name: name.to_string(),
        url: Some(url.to_string()),
    }
}

fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: "nortwind-senior-2022".to_string(),
            company: "Northwind Systems".to_string(),
            title: "Senior Software Engineer".to_string(),
            start_date: "2022-03-01".to_string(),
            end_date: "Present".to_string(),
            location: "Seattle, WA".to_string(),
            category: ExperienceCategory::FullTime,
            summary: "Leading the storefront platform team, owning the rendering pipeline \
                      and the design system rollout."
                .to_string(),
            achievements: vec![
                Achievement {
                    description: "Rebuilt the product listing stack around server-driven \
                                  rendering"
                        .to_string(),
                    metrics: Some(vec![
                        "38% faster first paint".to_string(),
                        "12% higher conversion".to_string(),
                    ]),
                    technologies: Some(vec![tech("react", "React", "https://react.dev")]),
                },
                Achievement {
                    description: "Introduced contract tests between frontend and catalog \
                                  services"
                        .to_string(),
                    metrics: None,
                    technologies: None,
                },
            ],
            technologies: vec![
                tech("react", "React", "https://react.dev"),
                tech("typescript", "TypeScript", "https://www.typescriptlang.org"),
                tech("postgresql", "PostgreSQL", "https://www.postgresql.org"),
            ],
            logo_url: Some("/images/companies/northwind.svg".to_string()),
            company_url: Some("https://northwind.example".to_string()),
            featured: Some(true),
            theme: Some(ExperienceTheme {
                primary: "#2563eb".to_string(),
                secondary: "#60A5FA".to_string(),
            }),
        },
        ExperienceEntry {
            id: "harborview-2019".to_string(),
            company: "Harborview Labs".to_string(),
            title: "Software Engineer".to_string(),
            start_date: "2019-06-01".to_string(),
            end_date: "2022-02-01".to_string(),
            location: "Portland, OR".to_string(),
            category: ExperienceCategory::FullTime,
            summary: "Built data ingestion tooling and internal dashboards for the \
                      analytics group."
                .to_string(),
            achievements: vec![Achievement {
                description: "Shipped the self-serve report builder used by every \
                              customer-facing team"
                    .to_string(),
                metrics: Some(vec!["cut ad-hoc report requests by 70%".to_string()]),
                technologies: Some(vec![tech("rust", "Rust", "https://www.rust-lang.org")]),
            }],
            technologies: vec![
                tech("rust", "Rust", "https://www.rust-lang.org"),
                tech("docker", "Docker", "https://www.docker.com"),
            ],
            logo_url: None,
            company_url: Some("https://harborview.example".to_string()),
            featured: None,
            theme: None,
        },
        ExperienceEntry {
            id: "osu-bs-2015".to_string(),
            company: "Oregon State University".to_string(),
            title: "B.S. Computer Science".to_string(),
            start_date: "2015-09-01".to_string(),
            end_date: "2019-06-01".to_string(),
            location: "Corvallis, OR".to_string(),
            category: ExperienceCategory::Education,
            summary: "Focus on systems programming and databases.".to_string(),
            achievements: vec![],
            technologies: vec![],
            logo_url: None,
            company_url: None,
            featured: None,
            theme: None,
        },
    ]
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

fn skill(
    id: &str,
    name: &str,
    category_id: &str,
    level: SkillLevel,
    years: f64,
    featured: bool,
    related: &[&str],
) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category_id: category_id.to_string(),
        description: None,
        url: None,
        icon: id.to_string(),
        level,
        years_of_experience: years,
        featured,
        related_skills: if related.is_empty() {
            None
        } else {
            Some(related.iter().map(|s| s.to_string()).collect())
        },
        projects: None,
        certifications: None,
    }
}

fn skills() -> Vec<Skill> {
    vec![
        skill(
            "typescript",
            "TypeScript",
            "frontend",
            SkillLevel::Expert,
            7.0,
            true,
            &["react", "javascript"],
        ),
        skill(
            "react",
            "React",
            "frontend",
            SkillLevel::Expert,
            6.5,
            true,
            &["typescript"],
        ),
        skill(
            "rust",
            "Rust",
            "backend",
            SkillLevel::Advanced,
            4.0,
            true,
            &["postgresql"],
        ),
        skill(
            "postgresql",
            "PostgreSQL",
            "database",
            SkillLevel::Advanced,
            5.0,
            false,
            &[],
        ),
        skill(
            "docker",
            "Docker",
            "devops",
            SkillLevel::Intermediate,
            3.0,
            false,
            &["kubernetes"],
        ),
    ]
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "portfolio-website".to_string(),
            title: "Modern Portfolio Website".to_string(),
            summary: "A responsive portfolio site with dark mode, scroll animations, and a \
                      content-driven project showcase."
                .to_string(),
            description: "A fully responsive portfolio website showcasing projects and \
                          skills, built mobile-first with dark mode support, smooth \
                          animations, and careful attention to accessibility."
                .to_string(),
            images: vec![
                ProjectImage {
                    src: "/images/projects/portfolio/hero.webp".to_string(),
                    alt: "Portfolio website hero section".to_string(),
                    caption: None,
                    featured: Some(true),
                    blur_data_url: None,
                },
                ProjectImage {
                    src: "/images/projects/portfolio/projects.webp".to_string(),
                    alt: "Portfolio projects section".to_string(),
                    caption: Some("Projects showcase with filtering and sorting".to_string()),
                    featured: None,
                    blur_data_url: None,
                },
            ],
            technologies: vec![
                Technology {
                    name: "React".to_string(),
                    icon: Some("react".to_string()),
                    url: Some("https://react.dev".to_string()),
                    color: Some("#61DAFB".to_string()),
                    kind: None,
                    description: None,
                },
                Technology {
                    name: "TypeScript".to_string(),
                    icon: Some("typescript".to_string()),
                    url: Some("https://www.typescriptlang.org".to_string()),
                    color: Some("#3178C6".to_string()),
                    kind: None,
                    description: None,
                },
            ],
            links: vec![
                ProjectLink {
                    kind: LinkType::Github,
                    url: "https://github.com/example/portfolio".to_string(),
                    label: "View Source".to_string(),
                    icon: Some("github".to_string()),
                },
                ProjectLink {
                    kind: LinkType::Demo,
                    url: "https://example.com".to_string(),
                    label: "Live Demo".to_string(),
                    icon: Some("external-link".to_string()),
                },
            ],
            date: "2024-02-25".to_string(),
            category: "Web Development".to_string(),
            featured: Some(true),
            status: Some(ProjectStatus::Completed),
            client: None,
            role: Some("Full Stack Developer".to_string()),
            duration: Some("2 months".to_string()),
            highlights: Some(vec![
                "Responsive design with a mobile-first approach".to_string(),
                "Dark mode with system preference detection".to_string(),
                "Custom scroll-triggered animations".to_string(),
            ]),
            challenges: None,
            seo: None,
            order: Some(1),
        },
        Project {
            id: "feed-engine".to_string(),
            title: "Content Feed Engine".to_string(),
            summary: "A static-content pipeline that validates blog posts and publishes \
                      RSS, Atom, and JSON feeds."
                .to_string(),
            description: "A build-time content pipeline that parses markdown articles, \
                          validates every record against the site's content rules, and \
                          renders syndication feeds in three formats."
                .to_string(),
            images: vec![ProjectImage {
                src: "/images/projects/feed-engine/pipeline.webp".to_string(),
                alt: "Feed pipeline diagram".to_string(),
                caption: None,
                featured: Some(true),
                blur_data_url: None,
            }],
            technologies: vec![Technology {
                name: "Rust".to_string(),
                icon: Some("rust".to_string()),
                url: Some("https://www.rust-lang.org".to_string()),
                color: Some("#DEA584".to_string()),
                kind: None,
                description: None,
            }],
            links: vec![ProjectLink {
                kind: LinkType::Github,
                url: "https://github.com/example/feed-engine".to_string(),
                label: "View Source".to_string(),
                icon: None,
            }],
            date: "2023-11-12".to_string(),
            category: "Tooling".to_string(),
            featured: Some(true),
            status: Some(ProjectStatus::Completed),
            client: None,
            role: None,
            duration: None,
            highlights: None,
            challenges: None,
            seo: None,
            order: Some(2),
        },
        Project {
            id: "timeline-kit".to_string(),
            title: "Resume Timeline Kit".to_string(),
            summary: "Reusable timeline components with duration math and category \
                      grouping for resume pages."
                .to_string(),
            description: "A component kit for resume timelines: calendar-accurate \
                          duration labels, per-category grouping and totals, and \
                          themeable entries driven entirely by static content."
                .to_string(),
            images: vec![ProjectImage {
                src: "/images/projects/timeline-kit/entries.webp".to_string(),
                alt: "Timeline entries with category badges".to_string(),
                caption: None,
                featured: None,
                blur_data_url: None,
            }],
            technologies: vec![
                Technology {
                    name: "TypeScript".to_string(),
                    icon: None,
                    url: None,
                    color: Some("#3178C6".to_string()),
                    kind: None,
                    description: None,
                },
                Technology {
                    name: "React".to_string(),
                    icon: None,
                    url: None,
                    color: None,
                    kind: None,
                    description: None,
                },
            ],
            links: vec![ProjectLink {
                kind: LinkType::Github,
                url: "https://github.com/example/timeline-kit".to_string(),
                label: "View Source".to_string(),
                icon: None,
            }],
            date: "2023-05-30".to_string(),
            category: "Web Development".to_string(),
            featured: None,
            status: Some(ProjectStatus::InProgress),
            client: None,
            role: None,
            duration: None,
            highlights: None,
            challenges: None,
            seo: None,
            order: None,
        },
    ]
}

//
// ──────────────────────────────────────────────────────────
// Blog posts
// ──────────────────────────────────────────────────────────
//

fn posts() -> Vec<BlogPost> {
    vec![BlogPost {
        meta: BlogPostMeta {
            title: "Validating Static Content at Build Time".to_string(),
            slug: "validating-static-content-at-build-time".to_string(),
            description: "Why collecting every authoring error beats failing on the first \
                          one."
                .to_string(),
            author: Author {
                name: "Jordan Doe".to_string(),
                avatar: Some("/images/avatar.jpg".to_string()),
            },
            published_at: "2024-02-26".to_string(),
            updated_at: None,
            category: BlogCategory::Programming,
            tags: vec![
                BlogTag {
                    id: "1".to_string(),
                    name: "Rust".to_string(),
                    slug: "rust".to_string(),
                },
                BlogTag {
                    id: "2".to_string(),
                    name: "Content".to_string(),
                    slug: "content".to_string(),
                },
            ],
            reading_time: 4,
            cover_image: Some(CoverImage {
                url: "/images/blog/build-time-validation.jpg".to_string(),
                alt: "Terminal output of a content check run".to_string(),
                caption: None,
            }),
            status: BlogPostStatus::Published,
            featured: Some(true),
            seo: None,
        },
        content: vec![
            BlogPostSection::Heading {
                id: "section-0".to_string(),
                content: "Introduction".to_string(),
                level: 1,
            },
            BlogPostSection::Text {
                id: "section-1".to_string(),
                content: "Static content fails quietly: a missing alt text or a reversed \
                          date range renders fine until it doesn't. Collecting every \
                          finding in one pass keeps the fix loop short."
                    .to_string(),
            },
            BlogPostSection::Code {
                id: "section-2".to_string(),
                content: "let errors = validate_project(&project);\nassert!(errors.is_empty());"
                    .to_string(),
                language: "rust".to_string(),
            },
            BlogPostSection::List {
                id: "section-3".to_string(),
                content: vec![
                    "Report all findings, never stop at the first".to_string(),
                    "Label nested findings with their index".to_string(),
                    "Keep validators pure so they run anywhere".to_string(),
                ],
                ordered: Some(false),
            },
        ],
        related_posts: None,
        series: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_collections_are_nonempty() {
        let content = StaticContent::default();
        assert!(!content.experiences().is_empty());
        assert!(!content.skills().is_empty());
        assert!(!content.projects().is_empty());
        assert!(!content.posts().is_empty());
    }
}
