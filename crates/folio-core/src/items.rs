use folio_types::{ItemId, MediaRef, Project, ProjectCategory, Skill, SkillCategory};

use crate::catalog::CatalogItem;
use crate::media::{Showcase, select_media};

impl Showcase for Project {
    fn video(&self) -> Option<&str> {
        self.video_url()
    }

    fn images(&self) -> &[String] {
        &self.images
    }

    fn thumbnail(&self) -> Option<&str> {
        Some(self.thumbnail.as_str()).filter(|t| !t.trim().is_empty())
    }
}

impl CatalogItem for Project {
    type Category = ProjectCategory;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn category(&self) -> Option<ProjectCategory> {
        self.category
    }

    fn media(&self) -> Vec<MediaRef> {
        select_media(self).zoomable()
    }
}

impl CatalogItem for Skill {
    type Category = SkillCategory;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn category(&self) -> Option<SkillCategory> {
        Some(self.category)
    }
}
