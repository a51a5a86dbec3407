use std::collections::HashMap;
use std::sync::LazyLock;

use crate::modules::skill::domain::entities::ColorPair;

/// Icon display metadata for a skill or category id. The `icon` field
/// names an icon in the site's icon set.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillIconInfo {
    pub icon: String,
    pub color: ColorPair,
    pub background: Option<ColorPair>,
}

fn icon(name: &str, light: &str, dark: &str) -> SkillIconInfo {
    SkillIconInfo {
        icon: name.to_string(),
        color: ColorPair::new(light, dark),
        background: None,
    }
}

fn icon_bg(name: &str, light: &str, dark: &str, bg_light: &str, bg_dark: &str) -> SkillIconInfo {
    SkillIconInfo {
        icon: name.to_string(),
        color: ColorPair::new(light, dark),
        background: Some(ColorPair::new(bg_light, bg_dark)),
    }
}

static SKILL_ICONS: LazyLock<HashMap<&'static str, SkillIconInfo>> = LazyLock::new(|| {
    let mut icons = HashMap::new();

    // Languages
    icons.insert("javascript", icon_bg("javascript", "#F7DF1E", "#F7DF1E", "#323330", "#323330"));
    icons.insert("typescript", icon("typescript", "#3178C6", "#3178C6"));
    icons.insert("python", icon("python", "#3776AB", "#4B8BBE"));
    icons.insert("java", icon("java", "#007396", "#5382A1"));
    icons.insert("go", icon("go", "#00ADD8", "#00ADD8"));
    icons.insert("rust", icon("rust", "#000000", "#DEA584"));

    // Frontend
    icons.insert("react", icon("react", "#61DAFB", "#61DAFB"));
    icons.insert("nextjs", icon("nextdotjs", "#000000", "#FFFFFF"));
    icons.insert("vue", icon("vuedotjs", "#4FC08D", "#4FC08D"));
    icons.insert("angular", icon("angular", "#DD0031", "#DD0031"));
    icons.insert("tailwindcss", icon("tailwindcss", "#06B6D4", "#38BDF8"));
    icons.insert("css", icon("css3", "#1572B6", "#33A9DC"));
    icons.insert("html", icon("html5", "#E34F26", "#F06529"));

    // Backend
    icons.insert("nodejs", icon("nodedotjs", "#339933", "#68A063"));

    // DevOps & Cloud
    icons.insert("docker", icon("docker", "#2496ED", "#2496ED"));
    icons.insert("kubernetes", icon("kubernetes", "#326CE5", "#326CE5"));
    icons.insert("aws", icon("amazonaws", "#FF9900", "#FF9900"));
    icons.insert("gcp", icon("googlecloud", "#4285F4", "#4285F4"));
    icons.insert("azure", icon("microsoftazure", "#0078D4", "#0078D4"));

    // Databases
    icons.insert("mongodb", icon("mongodb", "#47A248", "#4DB33D"));
    icons.insert("postgresql", icon("postgresql", "#4169E1", "#699ECA"));
    icons.insert("mysql", icon("mysql", "#4479A1", "#00758F"));
    icons.insert("redis", icon("redis", "#DC382D", "#DC382D"));

    // Tools
    icons.insert("git", icon("git", "#F05032", "#F05032"));
    icons.insert("github", icon("github", "#181717", "#FFFFFF"));
    icons.insert("jira", icon("jira", "#0052CC", "#2684FF"));
    icons.insert("figma", icon("figma", "#F24E1E", "#F24E1E"));
    icons.insert("vscode", icon("visualstudiocode", "#007ACC", "#007ACC"));
    icons.insert("linux", icon("linux", "#FCC624", "#FCC624"));

    // AI & ML
    icons.insert("tensorflow", icon("tensorflow", "#FF6F00", "#FF6F00"));
    icons.insert("pytorch", icon("pytorch", "#EE4C2C", "#EE4C2C"));
    icons.insert("scikit-learn", icon("scikitlearn", "#F7931E", "#F7931E"));
    icons.insert("pandas", icon("pandas", "#150458", "#E70488"));
    icons.insert("numpy", icon("numpy", "#013243", "#4DABCF"));
    icons.insert("jupyter", icon("jupyter", "#F37626", "#F37626"));

    // Category fallbacks, keyed as category_<id>
    icons.insert("category_frontend", icon("code", "#60A5FA", "#3B82F6"));
    icons.insert("category_backend", icon("server", "#34D399", "#10B981"));
    icons.insert("category_devops", icon("cloud", "#F472B6", "#EC4899"));
    icons.insert("category_mobile", icon("mobile", "#A78BFA", "#8B5CF6"));
    icons.insert("category_database", icon("database", "#FBBF24", "#F59E0B"));
    icons.insert("category_testing", icon("check-circle", "#4ADE80", "#22C55E"));
    icons.insert("category_ai", icon("brain", "#FB7185", "#F43F5E"));
    icons.insert("category_tools", icon("tools", "#94A3B8", "#64748B"));

    icons
});

/// Icon metadata for an arbitrary skill id. Absence is `None`: ids here
/// are free text, not an enum, so a miss is a normal outcome.
pub fn skill_icon(id: &str) -> Option<&'static SkillIconInfo> {
    SKILL_ICONS.get(id)
}

/// Icon metadata for a category id, keyed as `category_<id>`.
pub fn category_icon(id: &str) -> Option<&'static SkillIconInfo> {
    SKILL_ICONS.get(format!("category_{}", id).as_str())
}
