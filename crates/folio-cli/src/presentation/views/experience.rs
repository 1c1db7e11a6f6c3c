use std::fmt;

use crate::presentation::view_models::{ExperienceViewModel, ViewMode};

pub struct ExperienceView<'a> {
    data: &'a ExperienceViewModel,
    mode: ViewMode,
}

impl<'a> ExperienceView<'a> {
    pub fn new(data: &'a ExperienceViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(f, "{} @ {}", entry.title, entry.company)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(
                f,
                "{:<24} {:<28} {}",
                entry.company, entry.title, entry.duration
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verbose = self.mode == ViewMode::Verbose;
        for (index, entry) in self.data.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f, "│")?;
            }
            writeln!(f, "● ({}) {}", entry.monogram, entry.title)?;
            writeln!(f, "│ {}", entry.company)?;

            let meta: Vec<&str> = [&entry.kind, &entry.location, &entry.duration]
                .into_iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect();
            if !meta.is_empty() {
                writeln!(f, "│ {}", meta.join(" · "))?;
            }
            if !entry.description.is_empty() {
                writeln!(f, "│ {}", entry.description)?;
            }

            if !entry.responsibilities.is_empty() {
                writeln!(f, "│ Key Responsibilities & Achievements")?;
                let shown = if verbose { entry.responsibilities.len() } else { 3 };
                for item in entry.responsibilities.iter().take(shown) {
                    writeln!(f, "│   • {}", item)?;
                }
                if entry.responsibilities.len() > shown {
                    writeln!(f, "│   ... and {} more", entry.responsibilities.len() - shown)?;
                }
            }

            if !entry.technologies.is_empty() {
                writeln!(f, "│ Technologies Used: {}", entry.technologies.join(", "))?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ExperienceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}
