use std::fmt;

use crate::presentation::presenters::count_line;
use crate::presentation::view_models::{SkillListViewModel, ViewMode};

use super::write_filter_bar;

const BAR_WIDTH: usize = 20;

pub struct SkillListView<'a> {
    data: &'a SkillListViewModel,
    mode: ViewMode,
}

impl<'a> SkillListView<'a> {
    pub fn new(data: &'a SkillListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for skill in &self.data.skills {
            writeln!(f, "{}", skill.name)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for skill in &self.data.skills {
            writeln!(f, "{:<20} {:>3}%", skill.name, skill.proficiency)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_filter_bar(f, &self.data.filters)?;
        writeln!(f, "{}\n", count_line(self.data))?;

        for skill in &self.data.skills {
            writeln!(
                f,
                "{} {:<18} {} {:>3}%  {}",
                skill.monogram,
                skill.name,
                proficiency_bar(skill.proficiency),
                skill.proficiency,
                skill.level
            )?;
        }

        if !self.data.soft_skills.is_empty() {
            writeln!(f, "\nProfessional Skills")?;
            for soft in &self.data.soft_skills {
                writeln!(f, "  • {}", soft)?;
            }
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_filter_bar(f, &self.data.filters)?;
        writeln!(f, "{}\n", count_line(self.data))?;

        let mut current: Option<&str> = None;
        for skill in &self.data.skills {
            if current != Some(skill.category.as_str()) {
                writeln!(f, "{} {}", skill.icon, skill.category)?;
                current = Some(skill.category.as_str());
            }
            writeln!(
                f,
                "  {:<18} {} {:>3}%  {}",
                skill.name,
                proficiency_bar(skill.proficiency),
                skill.proficiency,
                skill.level
            )?;
        }

        if !self.data.soft_skills.is_empty() {
            writeln!(f, "\nProfessional Skills")?;
            for soft in &self.data.soft_skills {
                writeln!(f, "  • {}", soft)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SkillListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

pub(crate) fn proficiency_bar(proficiency: u8) -> String {
    let filled = (proficiency.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_bar_rounds() {
        assert_eq!(proficiency_bar(0), "░".repeat(20));
        assert_eq!(proficiency_bar(100), "█".repeat(20));
        assert_eq!(proficiency_bar(92).chars().filter(|c| *c == '█').count(), 18);
    }
}
