use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct CheckViewModel {
    pub source: String,
    pub documents: Vec<DocumentStatusViewModel>,
}

#[derive(Debug, Serialize)]
pub struct DocumentStatusViewModel {
    pub document: String,
    pub ok: bool,
    pub entries: usize,
    pub error: Option<String>,
}

impl CheckViewModel {
    pub fn failures(&self) -> usize {
        self.documents.iter().filter(|d| !d.ok).count()
    }
}

impl CreateView for CheckViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::check::CheckView;
        Box::new(CheckView::new(self, mode))
    }
}
