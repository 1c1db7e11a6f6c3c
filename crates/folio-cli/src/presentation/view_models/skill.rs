use serde::Serialize;
use std::fmt;

use super::common::FilterOptionViewModel;
use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct SkillListViewModel {
    pub filter: String,
    /// "Total" under all, else the category label
    pub filter_label: String,
    pub filters: Vec<FilterOptionViewModel>,
    pub skills: Vec<SkillCardViewModel>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillCardViewModel {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub monogram: char,
    pub proficiency: u8,
    pub level: String,
}

impl CreateView for SkillListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::skill::SkillListView;
        Box::new(SkillListView::new(self, mode))
    }
}
