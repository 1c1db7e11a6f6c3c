use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ProfileViewModel {
    pub name: String,
    pub taglines: Vec<String>,
    pub bio: String,
    pub location: String,
    pub email: Option<String>,
    pub mailto: Option<String>,
    pub phone: Option<String>,
    pub tel: Option<String>,
    pub resume_url: Option<String>,
    pub profile_image: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub education: Option<EducationViewModel>,
}

#[derive(Debug, Serialize)]
pub struct EducationViewModel {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub grade: Option<String>,
}

impl CreateView for ProfileViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::profile::ProfileView;
        Box::new(ProfileView::new(self, mode))
    }
}
