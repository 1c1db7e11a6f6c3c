use folio_types::ExperienceEntry;

use crate::presentation::view_models::{
    CommandResultViewModel, ExperienceEntryViewModel, ExperienceViewModel, StatusBadge,
};

use super::non_empty;

pub fn present_experience(entries: &[ExperienceEntry]) -> CommandResultViewModel<ExperienceViewModel> {
    let entries: Vec<ExperienceEntryViewModel> = entries
        .iter()
        .map(|entry| ExperienceEntryViewModel {
            id: entry.id.to_string(),
            title: entry.title.clone(),
            company: entry.company.clone(),
            monogram: entry.monogram(),
            kind: entry.kind.clone(),
            location: entry.location.clone(),
            duration: entry.duration.clone(),
            logo: entry.logo.as_deref().and_then(non_empty),
            description: entry.description.clone(),
            responsibilities: entry.responsibilities.clone(),
            technologies: entry.technologies.clone(),
        })
        .collect();

    let result = CommandResultViewModel::new(ExperienceViewModel { entries });
    if result.content.entries.is_empty() {
        result.with_badge(StatusBadge::info("No experience entries yet."))
    } else {
        result
    }
}
