use folio_core::LoadError;
use folio_runtime::SkillSet;
use folio_types::{ContactMessage, ExperienceEntry, Project, Summary};

use crate::types::PageArg;

/// Top-level pages, in navbar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Skills,
        Page::Projects,
        Page::Experience,
        Page::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Skills => "Skills",
            Page::Projects => "Projects",
            Page::Experience => "Experience",
            Page::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn cycle(&self, delta: isize) -> Page {
        let len = Page::ALL.len() as isize;
        Page::ALL[(self.index() as isize + delta).rem_euclid(len) as usize]
    }
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::About => Page::About,
            PageArg::Skills => Page::Skills,
            PageArg::Projects => Page::Projects,
            PageArg::Experience => Page::Experience,
            PageArg::Contact => Page::Contact,
        }
    }
}

/// Handler -> renderer. Every result carries the mount generation it was
/// requested for; the renderer drops results for pages no longer mounted.
#[derive(Debug)]
pub enum TuiEvent {
    Summary {
        generation: u64,
        result: Result<Summary, LoadError>,
    },
    Projects {
        generation: u64,
        result: Result<Vec<Project>, LoadError>,
    },
    Skills {
        generation: u64,
        result: Result<SkillSet, LoadError>,
    },
    Experience {
        generation: u64,
        result: Result<Vec<ExperienceEntry>, LoadError>,
    },
    Submitted {
        generation: u64,
        result: Result<(), String>,
    },
}

impl TuiEvent {
    pub fn generation(&self) -> u64 {
        match self {
            TuiEvent::Summary { generation, .. }
            | TuiEvent::Projects { generation, .. }
            | TuiEvent::Skills { generation, .. }
            | TuiEvent::Experience { generation, .. }
            | TuiEvent::Submitted { generation, .. } => *generation,
        }
    }
}

/// Renderer -> handler
#[derive(Debug, Clone, PartialEq)]
pub enum RendererSignal {
    /// A page was mounted and needs its document
    Load { page: Page, generation: u64 },
    Submit {
        generation: u64,
        message: ContactMessage,
    },
    Quit,
}
