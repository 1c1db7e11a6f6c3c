use std::fmt;

use crate::presentation::view_models::{ProfileViewModel, ViewMode};

pub struct ProfileView<'a> {
    data: &'a ProfileViewModel,
    mode: ViewMode,
}

impl<'a> ProfileView<'a> {
    pub fn new(data: &'a ProfileViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.name)
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.taglines.first() {
            Some(tagline) => writeln!(f, "{} - {}", self.data.name, tagline),
            None => writeln!(f, "{}", self.data.name),
        }
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.name)?;
        if !self.data.taglines.is_empty() {
            writeln!(f, "{}", self.data.taglines.join(" | "))?;
        }
        if !self.data.bio.is_empty() {
            writeln!(f, "\n{}", self.data.bio)?;
        }

        writeln!(f)?;
        if !self.data.location.is_empty() {
            writeln!(f, "Location: {}", self.data.location)?;
        }
        if let Some(email) = &self.data.email {
            writeln!(f, "Email:    {}", email)?;
        }
        if let Some(phone) = &self.data.phone {
            writeln!(f, "Phone:    {}", phone)?;
        }
        if let Some(github) = &self.data.github {
            writeln!(f, "GitHub:   {}", github)?;
        }
        if let Some(linkedin) = &self.data.linkedin {
            writeln!(f, "LinkedIn: {}", linkedin)?;
        }
        if let Some(resume) = &self.data.resume_url {
            writeln!(f, "Resume:   {}", resume)?;
        }

        if let Some(education) = &self.data.education {
            writeln!(f, "\nEducation")?;
            writeln!(f, "  {}", education.degree)?;
            writeln!(f, "  {}", education.institution)?;
            if !education.period.is_empty() {
                writeln!(f, "  {}", education.period)?;
            }
            if let Some(grade) = &education.grade {
                writeln!(f, "  {}", grade)?;
            }
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        if let Some(image) = &self.data.profile_image {
            writeln!(f, "\nPortrait: {}", image)?;
        }
        if let Some(mailto) = &self.data.mailto {
            writeln!(f, "Mail link: {}", mailto)?;
        }
        if let Some(tel) = &self.data.tel {
            writeln!(f, "Call link: {}", tel)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ProfileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
