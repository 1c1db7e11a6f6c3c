use folio_core::{CatalogStore, LoadState, MediaSelection, select_media};
use folio_types::{Category, Project};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, MediaViewModel, ProjectCardViewModel, ProjectDetailViewModel,
    ProjectListViewModel, StatusBadge,
};

use super::{filter_options, non_empty};

/// Cards show this many technologies before collapsing the rest into "+N"
const CARD_TECH_LIMIT: usize = 4;

pub fn present_project_list(store: &CatalogStore<Project>) -> CommandResultViewModel<ProjectListViewModel> {
    let projects: Vec<ProjectCardViewModel> = store.filtered().map(present_card).collect();
    let filter = store.filter();

    let content = ProjectListViewModel {
        filter: filter.key().to_string(),
        filters: filter_options(store),
        projects,
        total: store.items().len(),
    };

    let mut result = CommandResultViewModel::new(content);

    match store.state() {
        LoadState::Failed(err) => {
            result = result
                .with_badge(StatusBadge::error(format!("Could not load projects: {}", err)))
                .with_suggestion(
                    Guidance::new("Check the content documents").with_command("folio check"),
                );
        }
        LoadState::Pending => {
            result = result.with_badge(StatusBadge::info("Loading projects..."));
        }
        LoadState::Ready if result.content.projects.is_empty() => {
            result = result.with_badge(StatusBadge::info("No projects found in this category."));
            if filter.category().is_some() {
                result = result.with_suggestion(
                    Guidance::new("Show every project").with_command("folio projects --category all"),
                );
            }
        }
        LoadState::Ready => {
            let shown = result.content.projects.len();
            let label = if filter.category().is_some() {
                format!("{} of {} project(s) in {}", shown, result.content.total, filter.label())
            } else {
                format!("{} project(s)", shown)
            };
            result = result.with_badge(StatusBadge::success(label));
        }
    }

    result
}

fn present_card(project: &Project) -> ProjectCardViewModel {
    let technologies: Vec<String> = project
        .technologies
        .iter()
        .take(CARD_TECH_LIMIT)
        .cloned()
        .collect();

    ProjectCardViewModel {
        id: project.id.to_string(),
        title: project.title.clone(),
        subtitle: project.subtitle.clone(),
        description: project.description.clone(),
        category: project.category.map(|c| c.label().to_string()),
        status: project.status.as_deref().and_then(non_empty),
        more_technologies: project.technologies.len().saturating_sub(CARD_TECH_LIMIT),
        technologies,
        github_url: project.github().map(str::to_string),
        live_url: project.live().map(str::to_string),
        featured: project.featured,
    }
}

pub fn present_media(project: &Project) -> MediaViewModel {
    match select_media(project) {
        MediaSelection::Video(url) => MediaViewModel::Video {
            url: url.to_string(),
            poster: non_empty(&project.thumbnail),
        },
        MediaSelection::Grid(images) => MediaViewModel::Grid {
            images: images.to_vec(),
        },
        MediaSelection::Thumbnail(url) => MediaViewModel::Thumbnail {
            url: url.to_string(),
        },
        MediaSelection::Nothing => MediaViewModel::None,
    }
}

pub fn present_project_detail(project: &Project) -> CommandResultViewModel<ProjectDetailViewModel> {
    let content = ProjectDetailViewModel {
        id: project.id.to_string(),
        title: project.title.clone(),
        subtitle: project.subtitle.clone(),
        category: project.category.map(|c| c.label().to_string()),
        status: project.status.as_deref().and_then(non_empty),
        long_description: if project.long_description.trim().is_empty() {
            project.description.clone()
        } else {
            project.long_description.clone()
        },
        media: present_media(project),
        features: project.features.clone(),
        technologies: project.technologies.clone(),
        github_url: project.github().map(str::to_string),
        live_url: project.live().map(str::to_string),
    };

    CommandResultViewModel::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{CategoryFilter, ProjectCategory};

    fn projects() -> Vec<Project> {
        serde_json::from_str(
            r#"[
                {"id": 1, "title": "Shop", "category": "Web", "thumbnail": "/shop.png",
                 "technologies": ["React", "Node.js", "PostgreSQL", "Redis", "Docker", "AWS"]},
                {"id": 2, "title": "Tracker", "category": "Mobile", "thumbnail": "/tracker.png",
                 "video": "/tracker.mp4", "githubUrl": ""}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_card_collapses_extra_technologies() {
        let mut store = CatalogStore::new();
        store.apply(Ok(projects())).unwrap();
        let result = present_project_list(&store);

        let card = &result.content.projects[0];
        assert_eq!(card.technologies.len(), 4);
        assert_eq!(card.more_technologies, 2);
        assert_eq!(result.content.projects[1].github_url, None);
    }

    #[test]
    fn test_filter_counts_and_badge() {
        let mut store = CatalogStore::new();
        store.apply(Ok(projects())).unwrap();
        store.set_filter(CategoryFilter::Only(ProjectCategory::Mobile));
        let result = present_project_list(&store);

        let counts: Vec<(String, usize, bool)> = result
            .content
            .filters
            .iter()
            .map(|f| (f.key.clone(), f.count, f.active))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("all".to_string(), 2, false),
                ("Web".to_string(), 1, false),
                ("Mobile".to_string(), 1, true),
                ("Other".to_string(), 0, false),
            ]
        );
        assert_eq!(
            result.badge.map(|b| b.label),
            Some("1 of 2 project(s) in Mobile".to_string())
        );
    }

    #[test]
    fn test_detail_media_prefers_video() {
        let detail = present_project_detail(&projects()[1]);
        assert_eq!(
            detail.content.media,
            MediaViewModel::Video {
                url: "/tracker.mp4".to_string(),
                poster: Some("/tracker.png".to_string()),
            }
        );
    }
}
