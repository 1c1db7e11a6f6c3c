//! Schemas of the static JSON documents the portfolio is built from.

mod contact;
mod experience;
mod project;
mod skill;
mod summary;

pub use contact::ContactMessage;
pub use experience::ExperienceEntry;
pub use project::Project;
pub use skill::{ProficiencyLevel, Skill, SkillEntry, SkillsDocument};
pub use summary::{Education, SocialLinks, Summary};

/// Document names under the content root
pub const PROJECTS_DOCUMENT: &str = "projects.json";
pub const SKILLS_DOCUMENT: &str = "frameworks.json";
pub const EXPERIENCE_DOCUMENT: &str = "experience.json";
pub const SUMMARY_DOCUMENT: &str = "summary.json";
