use serde::Serialize;
use std::fmt;

use super::common::FilterOptionViewModel;
use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectListViewModel {
    pub filter: String,
    pub filters: Vec<FilterOptionViewModel>,
    pub projects: Vec<ProjectCardViewModel>,
    /// Size of the unfiltered collection
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ProjectCardViewModel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub category: Option<String>,
    pub status: Option<String>,
    /// First four technologies; the rest are counted in `more_technologies`
    pub technologies: Vec<String>,
    pub more_technologies: usize,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailViewModel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: Option<String>,
    pub status: Option<String>,
    pub long_description: String,
    pub media: MediaViewModel,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Media the detail view shows, after the selection policy ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaViewModel {
    Video { url: String, poster: Option<String> },
    Grid { images: Vec<String> },
    Thumbnail { url: String },
    None,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ProjectListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectListView;
        Box::new(ProjectListView::new(self, mode))
    }
}

impl CreateView for ProjectDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectDetailView;
        Box::new(ProjectDetailView::new(self, mode))
    }
}
