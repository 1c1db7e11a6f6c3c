use std::fmt;

use crate::presentation::view_models::{
    MediaViewModel, ProjectCardViewModel, ProjectDetailViewModel, ProjectListViewModel, ViewMode,
};

use super::{tech_line, write_filter_bar};

// --------------------------------------------------------
// Project List View
// --------------------------------------------------------

pub struct ProjectListView<'a> {
    data: &'a ProjectListViewModel,
    mode: ViewMode,
}

impl<'a> ProjectListView<'a> {
    pub fn new(data: &'a ProjectListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for project in &self.data.projects {
            writeln!(f, "{}", project.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for project in &self.data.projects {
            writeln!(
                f,
                "{:<6} {:<8} {}",
                project.id,
                project.category.as_deref().unwrap_or("-"),
                project.title
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_filter_bar(f, &self.data.filters)?;
        for project in &self.data.projects {
            writeln!(f)?;
            self.render_card(f, project)?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        writeln!(
            f,
            "\nShowing {} of {} project(s) (filter: {})",
            self.data.projects.len(),
            self.data.total,
            self.data.filter
        )
    }

    fn render_card(&self, f: &mut fmt::Formatter, project: &ProjectCardViewModel) -> fmt::Result {
        let star = if project.featured { " ★" } else { "" };
        writeln!(f, "{} [{}]{}", project.title, project.id, star)?;
        if !project.subtitle.is_empty() {
            writeln!(f, "  {}", project.subtitle)?;
        }
        if let Some(status) = &project.status {
            writeln!(f, "  Status: {}", status)?;
        }
        if !project.description.is_empty() {
            writeln!(f, "  {}", project.description)?;
        }
        if !project.technologies.is_empty() {
            writeln!(
                f,
                "  {}",
                tech_line(&project.technologies, project.more_technologies)
            )?;
        }
        if self.mode == ViewMode::Verbose {
            if let Some(url) = &project.github_url {
                writeln!(f, "  Code: {}", url)?;
            }
            if let Some(url) = &project.live_url {
                writeln!(f, "  Live: {}", url)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ProjectListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Project Detail View
// --------------------------------------------------------

pub struct ProjectDetailView<'a> {
    data: &'a ProjectDetailViewModel,
    mode: ViewMode,
}

impl<'a> ProjectDetailView<'a> {
    pub fn new(data: &'a ProjectDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.title)
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} ({}) media: {}",
            self.data.title,
            self.data.category.as_deref().unwrap_or("uncategorized"),
            media_summary(&self.data.media)
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.title)?;
        if !self.data.subtitle.is_empty() {
            writeln!(f, "{}", self.data.subtitle)?;
        }
        if let Some(status) = &self.data.status {
            writeln!(f, "Status: {}", status)?;
        }
        writeln!(f)?;
        write_media(f, &self.data.media)?;

        if !self.data.long_description.is_empty() {
            writeln!(f, "\n{}", self.data.long_description)?;
        }

        if !self.data.features.is_empty() {
            writeln!(f, "\nKey Features")?;
            for feature in &self.data.features {
                writeln!(f, "  • {}", feature)?;
            }
        }

        if !self.data.technologies.is_empty() {
            writeln!(f, "\nTechnologies Used")?;
            writeln!(f, "  {}", self.data.technologies.join(", "))?;
        }

        if self.data.github_url.is_some() || self.data.live_url.is_some() {
            writeln!(f)?;
            if let Some(url) = &self.data.github_url {
                writeln!(f, "View Code: {}", url)?;
            }
            if let Some(url) = &self.data.live_url {
                writeln!(f, "Live Demo: {}", url)?;
            }
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        writeln!(f, "\nId: {}", self.data.id)?;
        if let Some(category) = &self.data.category {
            writeln!(f, "Category: {}", category)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ProjectDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

pub(crate) fn media_summary(media: &MediaViewModel) -> String {
    match media {
        MediaViewModel::Video { .. } => "video".to_string(),
        MediaViewModel::Grid { images } => format!("{} images", images.len()),
        MediaViewModel::Thumbnail { .. } => "thumbnail".to_string(),
        MediaViewModel::None => "none".to_string(),
    }
}

fn write_media(f: &mut fmt::Formatter, media: &MediaViewModel) -> fmt::Result {
    match media {
        MediaViewModel::Video { url, poster } => {
            writeln!(f, "Video: {}", url)?;
            if let Some(poster) = poster {
                writeln!(f, "Poster: {}", poster)?;
            }
        }
        MediaViewModel::Grid { images } => {
            writeln!(f, "Gallery:")?;
            for (index, image) in images.iter().enumerate() {
                writeln!(f, "  [{}] {}", index + 1, image)?;
            }
        }
        MediaViewModel::Thumbnail { url } => writeln!(f, "Image: {}", url)?,
        MediaViewModel::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::FilterOptionViewModel;

    fn list() -> ProjectListViewModel {
        ProjectListViewModel {
            filter: "Web".to_string(),
            filters: vec![
                FilterOptionViewModel {
                    key: "all".to_string(),
                    label: "All".to_string(),
                    count: 2,
                    active: false,
                },
                FilterOptionViewModel {
                    key: "Web".to_string(),
                    label: "Web".to_string(),
                    count: 1,
                    active: true,
                },
            ],
            projects: vec![ProjectCardViewModel {
                id: "1".to_string(),
                title: "Shop".to_string(),
                subtitle: String::new(),
                description: "Storefront".to_string(),
                category: Some("Web".to_string()),
                status: None,
                technologies: vec!["React".to_string(), "Node.js".to_string()],
                more_technologies: 3,
                github_url: None,
                live_url: None,
                featured: true,
            }],
            total: 2,
        }
    }

    #[test]
    fn test_standard_list() {
        let data = list();
        let out = ProjectListView::new(&data, ViewMode::Standard).to_string();
        assert_eq!(
            out,
            "All 2  [Web 1]\n\nShop [1] ★\n  Storefront\n  React, Node.js +3\n"
        );
    }

    #[test]
    fn test_compact_list() {
        let data = list();
        let out = ProjectListView::new(&data, ViewMode::Compact).to_string();
        assert_eq!(out, "1      Web      Shop\n");
    }

    #[test]
    fn test_detail_grid_lists_images() {
        let data = ProjectDetailViewModel {
            id: "2".to_string(),
            title: "Tracker".to_string(),
            subtitle: String::new(),
            category: Some("Mobile".to_string()),
            status: Some("Completed".to_string()),
            long_description: String::new(),
            media: MediaViewModel::Grid {
                images: vec!["/a.png".into(), "/b.png".into(), "/c.png".into()],
            },
            features: vec!["Offline sync".to_string()],
            technologies: Vec::new(),
            github_url: None,
            live_url: None,
        };
        let out = ProjectDetailView::new(&data, ViewMode::Standard).to_string();
        assert_eq!(
            out,
            "Tracker\nStatus: Completed\n\nGallery:\n  [1] /a.png\n  [2] /b.png\n  [3] /c.png\n\nKey Features\n  • Offline sync\n"
        );
        assert_eq!(
            ProjectDetailView::new(&data, ViewMode::Compact).to_string(),
            "Tracker (Mobile) media: 3 images\n"
        );
    }
}
