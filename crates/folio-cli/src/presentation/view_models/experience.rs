use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ExperienceViewModel {
    pub entries: Vec<ExperienceEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ExperienceEntryViewModel {
    pub id: String,
    pub title: String,
    pub company: String,
    pub monogram: char,
    pub kind: String,
    pub location: String,
    pub duration: String,
    pub logo: Option<String>,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

impl CreateView for ExperienceViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::experience::ExperienceView;
        Box::new(ExperienceView::new(self, mode))
    }
}
