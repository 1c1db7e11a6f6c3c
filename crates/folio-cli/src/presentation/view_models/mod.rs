use std::fmt;

pub mod check;
pub mod common;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod result;
pub mod skill;

pub use check::{CheckViewModel, DocumentStatusViewModel};
pub use common::{FilterOptionViewModel, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use contact::{ContactResultViewModel, FieldErrorViewModel, SubmissionOutcome};
pub use experience::{ExperienceEntryViewModel, ExperienceViewModel};
pub use profile::{EducationViewModel, ProfileViewModel};
pub use project::{
    MediaViewModel, ProjectCardViewModel, ProjectDetailViewModel, ProjectListViewModel,
};
pub use result::CommandResultViewModel;
pub use skill::{SkillCardViewModel, SkillListViewModel};

/// Bridge from a view model to its text view at a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
