use serde::{Deserialize, Serialize};

use crate::category::{ProjectCategory, lenient};
use crate::id::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<ProjectCategory>,
    #[serde(default)]
    pub status: Option<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Video url, treating an empty string as absent
    pub fn video_url(&self) -> Option<&str> {
        self.video.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn github(&self) -> Option<&str> {
        self.github_url.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn live(&self) -> Option<&str> {
        self.live_url.as_deref().filter(|v| !v.trim().is_empty())
    }
}
