use std::sync::LazyLock;

use crate::modules::skill::domain::entities::{ColorPair, SkillCategory};

fn category(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    color: ColorPair,
    order: u8,
) -> SkillCategory {
    SkillCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        icon: icon.to_string(),
        color,
        order,
    }
}

static SKILL_CATEGORIES: LazyLock<Vec<SkillCategory>> = LazyLock::new(|| {
    vec![
        category(
            "frontend",
            "Frontend Development",
            "Building responsive, accessible, and performant user interfaces",
            "code",
            ColorPair::new("#60A5FA", "#3B82F6"),
            1,
        ),
        category(
            "backend",
            "Backend Development",
            "Designing scalable server-side applications and APIs",
            "server",
            ColorPair::new("#34D399", "#10B981"),
            2,
        ),
        category(
            "devops",
            "DevOps & Cloud",
            "Automating deployment, scaling, and infrastructure management",
            "cloud",
            ColorPair::new("#F472B6", "#EC4899"),
            3,
        ),
        category(
            "mobile",
            "Mobile Development",
            "Creating native and cross-platform mobile applications",
            "mobile",
            ColorPair::new("#A78BFA", "#8B5CF6"),
            4,
        ),
        category(
            "database",
            "Database & Storage",
            "Managing data storage, retrieval, and optimization",
            "database",
            ColorPair::new("#FBBF24", "#F59E0B"),
            5,
        ),
        category(
            "testing",
            "Testing & Quality",
            "Ensuring code quality through testing and automation",
            "check-circle",
            ColorPair::new("#4ADE80", "#22C55E"),
            6,
        ),
        category(
            "ai-ml",
            "AI & Machine Learning",
            "Implementing intelligent systems and data analysis",
            "brain",
            ColorPair::new("#FB7185", "#F43F5E"),
            7,
        ),
        category(
            "tools",
            "Tools & Productivity",
            "Development tools, IDEs, and productivity software",
            "tools",
            ColorPair::new("#94A3B8", "#64748B"),
            8,
        ),
    ]
});

/// The full category table, in declaration order.
pub fn skill_categories() -> &'static [SkillCategory] {
    &SKILL_CATEGORIES
}

/// Free-text lookup; an unknown id is `None`, not an error.
pub fn skill_category(id: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|category| category.id == id)
}

/// Categories ordered by their declared display order.
pub fn sorted_skill_categories() -> Vec<&'static SkillCategory> {
    let mut categories: Vec<&'static SkillCategory> = SKILL_CATEGORIES.iter().collect();
    categories.sort_by_key(|category| category.order);
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_finds_known_categories() {
        let frontend = skill_category("frontend").unwrap();
        assert_eq!(frontend.name, "Frontend Development");
        assert!(skill_category("underwater-basket-weaving").is_none());
    }

    #[test]
    fn ids_and_orders_are_unique() {
        let ids: HashSet<&str> = skill_categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), skill_categories().len());
        let orders: HashSet<u8> = skill_categories().iter().map(|c| c.order).collect();
        assert_eq!(orders.len(), skill_categories().len());
    }

    #[test]
    fn sorted_categories_respect_order_field() {
        let sorted = sorted_skill_categories();
        assert!(sorted.windows(2).all(|pair| pair[0].order < pair[1].order));
        assert_eq!(sorted[0].id, "frontend");
    }
}
