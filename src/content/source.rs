use crate::modules::blog::domain::entities::BlogPost;
use crate::modules::experience::domain::entities::ExperienceEntry;
use crate::modules::project::domain::entities::Project;
use crate::modules::skill::domain::entities::Skill;

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Read-side port over the site's content collections. The bundled
/// implementation serves static literals; everything behind this trait
/// is synchronous and side-effect free, so callers may share one
/// instance across threads freely.
pub trait ContentSource: Send + Sync {
    fn experiences(&self) -> &[ExperienceEntry];
    fn skills(&self) -> &[Skill];
    fn projects(&self) -> &[Project];
    fn posts(&self) -> &[BlogPost];
}
