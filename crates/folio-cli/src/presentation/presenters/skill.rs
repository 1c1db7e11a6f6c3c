use folio_core::{CatalogStore, LoadState};
use folio_types::{Category, CategoryFilter, Skill};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, SkillCardViewModel, SkillListViewModel, StatusBadge,
};

use super::filter_options;

pub fn present_skill_list(
    store: &CatalogStore<Skill>,
    soft_skills: &[String],
) -> CommandResultViewModel<SkillListViewModel> {
    let filter = store.filter();
    let skills: Vec<SkillCardViewModel> = store
        .filtered()
        .map(|skill| SkillCardViewModel {
            id: skill.id.to_string(),
            name: skill.name.clone(),
            category: skill.category.label().to_string(),
            icon: skill.category.icon().to_string(),
            monogram: skill.monogram(),
            proficiency: skill.proficiency,
            level: skill.level().label().to_string(),
        })
        .collect();

    let content = SkillListViewModel {
        filter: filter.key().to_string(),
        filter_label: match filter {
            CategoryFilter::All => "Total".to_string(),
            CategoryFilter::Only(category) => category.label().to_string(),
        },
        filters: filter_options(store),
        skills,
        soft_skills: soft_skills.to_vec(),
    };

    let mut result = CommandResultViewModel::new(content);
    match store.state() {
        LoadState::Failed(err) => {
            result = result
                .with_badge(StatusBadge::error(format!("Could not load skills: {}", err)))
                .with_suggestion(
                    Guidance::new("Check the content documents").with_command("folio check"),
                );
        }
        LoadState::Pending => {
            result = result.with_badge(StatusBadge::info("Loading skills..."));
        }
        LoadState::Ready => {
            let line = count_line(&result.content);
            result = result.with_badge(StatusBadge::success(line));
        }
    }
    result
}

/// "12 Total Skills", "1 Backend Skill"
pub fn count_line(list: &SkillListViewModel) -> String {
    let count = list.skills.len();
    format!(
        "{} {} Skill{}",
        count,
        list.filter_label,
        if count == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{SkillCategory, SkillsDocument};

    fn store() -> (CatalogStore<Skill>, Vec<String>) {
        let doc: SkillsDocument = serde_json::from_str(
            r#"{
                "languages": [{"name": "Rust", "proficiency": 92}, {"name": "go", "proficiency": 75}],
                "backend": [{"name": "Axum", "proficiency": 81}],
                "softSkills": ["Mentoring"]
            }"#,
        )
        .unwrap();
        let (skills, soft) = doc.into_parts();
        let mut store = CatalogStore::new();
        store.apply(Ok(skills)).unwrap();
        (store, soft)
    }

    #[test]
    fn test_count_line_under_all() {
        let (store, soft) = store();
        let result = present_skill_list(&store, &soft);
        assert_eq!(result.badge.unwrap().label, "3 Total Skills");
        assert_eq!(result.content.soft_skills, vec!["Mentoring".to_string()]);
    }

    #[test]
    fn test_count_line_singular_category() {
        let (mut store, soft) = store();
        store.set_filter(CategoryFilter::Only(SkillCategory::Backend));
        let result = present_skill_list(&store, &soft);

        assert_eq!(result.badge.unwrap().label, "1 Backend Skill");
        let card = &result.content.skills[0];
        assert_eq!(card.level, "Advanced");
        assert_eq!(card.monogram, 'A');
    }
}
