use serde::{Deserialize, Serialize};

/// Pointer to one media asset (image or video) of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
}

impl MediaRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn kind(&self) -> MediaKind {
        let lower = self.url.to_ascii_lowercase();
        let path = lower.split(['?', '#']).next().unwrap_or_default();
        if [".mp4", ".webm", ".mov", ".m4v"]
            .iter()
            .any(|ext| path.ends_with(ext))
        {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}
