use std::sync::LazyLock;

use super::entities::{ColorPair, SkillLevel};

/// Display and progression metadata for a proficiency level.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillLevelInfo {
    pub name: String,
    pub description: String,
    /// Progress-bar value, 0-100, monotonically increasing with level.
    pub value: u8,
    pub color: ColorPair,
    pub icon: String,
    /// Years of experience typically needed; strictly increasing.
    pub typical_years: f64,
}

// Indexed by the enum discriminant; keep in declaration order.
static LEVEL_INFO: LazyLock<[SkillLevelInfo; 4]> = LazyLock::new(|| {
    [
        SkillLevelInfo {
            name: "Beginner".to_string(),
            description: "Basic understanding and limited practical experience".to_string(),
            value: 25,
            color: ColorPair::new("#94A3B8", "#64748B"),
            icon: "seedling".to_string(),
            typical_years: 0.5,
        },
        SkillLevelInfo {
            name: "Intermediate".to_string(),
            description: "Good working knowledge and regular practical application".to_string(),
            value: 50,
            color: ColorPair::new("#60A5FA", "#3B82F6"),
            icon: "tree".to_string(),
            typical_years: 2.0,
        },
        SkillLevelInfo {
            name: "Advanced".to_string(),
            description: "Deep understanding and extensive practical experience".to_string(),
            value: 75,
            color: ColorPair::new("#34D399", "#10B981"),
            icon: "tree-large".to_string(),
            typical_years: 4.0,
        },
        SkillLevelInfo {
            name: "Expert".to_string(),
            description: "Mastery level with proven track record and ability to innovate"
                .to_string(),
            value: 100,
            color: ColorPair::new("#FBBF24", "#F59E0B"),
            icon: "crown".to_string(),
            typical_years: 6.0,
        },
    ]
});

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    /// Metadata for this level. Total over the enum, O(1).
    pub fn info(self) -> &'static SkillLevelInfo {
        &LEVEL_INFO[self as usize]
    }

    fn next(self) -> Option<SkillLevel> {
        match self {
            SkillLevel::Beginner => Some(SkillLevel::Intermediate),
            SkillLevel::Intermediate => Some(SkillLevel::Advanced),
            SkillLevel::Advanced => Some(SkillLevel::Expert),
            SkillLevel::Expert => None,
        }
    }
}

/// The level someone with `years` of experience typically holds.
pub fn level_from_years(years: f64) -> SkillLevel {
    if years >= SkillLevel::Expert.info().typical_years {
        SkillLevel::Expert
    } else if years >= SkillLevel::Advanced.info().typical_years {
        SkillLevel::Advanced
    } else if years >= SkillLevel::Intermediate.info().typical_years {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

/// Progress-bar percentage (0-100) for a level.
pub fn level_progress(level: SkillLevel) -> u8 {
    level.info().value
}

/// Fraction of the way from `level`'s typical years to the next level's,
/// clamped to [0, 1]. The top level is always 1.
pub fn relative_level_progress(years: f64, level: SkillLevel) -> f64 {
    let current = level.info();
    let Some(next) = level.next() else {
        return 1.0;
    };
    let next = next.info();

    let years_in_level = years - current.typical_years;
    let years_to_next = next.typical_years - current.typical_years;
    (years_in_level / years_to_next).clamp(0.0, 1.0)
}

/// "7 months", "1 year", "3 years".
pub fn format_years_of_experience(years: f64) -> String {
    if years < 1.0 {
        let months = (years * 12.0).round() as i64;
        return format!("{} month{}", months, if months == 1 { "" } else { "s" });
    }
    format!("{} year{}", years, if years == 1.0 { "" } else { "s" })
}
