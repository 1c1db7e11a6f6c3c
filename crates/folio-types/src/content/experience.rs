use serde::{Deserialize, Serialize};

use crate::id::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: ItemId,
    pub title: String,
    pub company: String,
    /// Employment type ("Full-time", "Internship", ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ExperienceEntry {
    /// Letter shown when the logo can't be displayed
    pub fn monogram(&self) -> char {
        self.company
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
