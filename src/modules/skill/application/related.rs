use crate::modules::skill::domain::entities::Skill;

/// Skills belonging to a category, in collection order.
pub fn skills_in_category<'a>(skills: &'a [Skill], category_id: &str) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|skill| skill.category_id == category_id)
        .collect()
}

/// Featured skills, in collection order, optionally capped.
pub fn featured_skills(skills: &[Skill], limit: Option<usize>) -> Vec<&Skill> {
    let featured = skills.iter().filter(|skill| skill.featured);
    match limit {
        Some(limit) => featured.take(limit).collect(),
        None => featured.collect(),
    }
}

/// Resolves a skill's related-skill ids against the pool. The ids are
/// weak references: dangling ones are silently skipped, preserving the
/// declared order of the ones that resolve.
pub fn resolve_related_skills<'a>(skill: &Skill, pool: &'a [Skill]) -> Vec<&'a Skill> {
    let Some(related_ids) = &skill.related_skills else {
        return Vec::new();
    };
    related_ids
        .iter()
        .filter_map(|id| pool.iter().find(|candidate| &candidate.id == id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::domain::entities::SkillLevel;

    /* --------------------------------------------------
     * Fixtures
     * -------------------------------------------------- */

    fn skill(id: &str, category_id: &str, featured: bool, related: &[&str]) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_string(),
            category_id: category_id.to_string(),
            description: None,
            url: None,
            icon: id.to_string(),
            level: SkillLevel::Advanced,
            years_of_experience: 4.0,
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

    fn sample_pool() -> Vec<Skill> {
        vec![
            skill("react", "frontend", true, &["typescript", "nextjs"]),
            skill("typescript", "frontend", true, &[]),
            skill("rust", "backend", false, &["tokio-which-does-not-exist"]),
        ]
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[test]
    fn category_membership() {
        let pool = sample_pool();
        let frontend = skills_in_category(&pool, "frontend");
        assert_eq!(frontend.len(), 2);
        assert!(skills_in_category(&pool, "devops").is_empty());
    }

    #[test]
    fn featured_respects_limit() {
        let pool = sample_pool();
        assert_eq!(featured_skills(&pool, None).len(), 2);
        let capped = featured_skills(&pool, Some(1));
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].id, "react");
    }

    #[test]
    fn related_resolution_keeps_declared_order() {
        let pool = sample_pool();
        let related = resolve_related_skills(&pool[0], &pool);
        // "nextjs" dangles and is skipped
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "typescript");
    }

    #[test]
    fn dangling_references_are_tolerated() {
        let pool = sample_pool();
        assert!(resolve_related_skills(&pool[2], &pool).is_empty());
    }

    #[test]
    fn no_related_list_resolves_to_empty() {
        let pool = sample_pool();
        assert!(resolve_related_skills(&pool[1], &pool).is_empty());
    }
}
