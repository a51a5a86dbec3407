pub mod blog;
pub mod experience;
pub mod project;
pub mod skill;
