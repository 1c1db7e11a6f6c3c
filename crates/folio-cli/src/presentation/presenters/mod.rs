pub mod check;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;

pub use check::present_check;
pub use contact::{present_contact_failed, present_contact_invalid, present_contact_sent};
pub use experience::present_experience;
pub use profile::present_profile;
pub use project::{present_project_detail, present_project_list};
pub use skill::{count_line, present_skill_list};

use folio_core::{CatalogItem, CatalogStore};
use folio_types::CategoryFilter;

use crate::presentation::view_models::FilterOptionViewModel;

/// Filter controls for a catalog, `All` first, with per-option counts.
pub(crate) fn filter_options<T: CatalogItem>(store: &CatalogStore<T>) -> Vec<FilterOptionViewModel> {
    let active = store.filter();
    CategoryFilter::<T::Category>::options()
        .into_iter()
        .map(|option| FilterOptionViewModel {
            key: option.key().to_string(),
            label: option.label().to_string(),
            count: store.count_matching(option),
            active: option == active,
        })
        .collect()
}

/// Empty strings in content files mean "absent"
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
