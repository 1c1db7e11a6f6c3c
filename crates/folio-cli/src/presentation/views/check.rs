use std::fmt;

use crate::presentation::view_models::{CheckViewModel, ViewMode};

pub struct CheckView<'a> {
    data: &'a CheckViewModel,
    mode: ViewMode,
}

impl<'a> CheckView<'a> {
    pub fn new(data: &'a CheckViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for doc in &self.data.documents {
            writeln!(f, "{}: {}", doc.document, if doc.ok { "ok" } else { "failed" })?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source: {}\n", self.data.source)?;
        for doc in &self.data.documents {
            if doc.ok {
                writeln!(f, "  ✓ {:<16} {} entries", doc.document, doc.entries)?;
            } else {
                writeln!(f, "  ✗ {:<16} {}", doc.document, doc.error.as_deref().unwrap_or("failed"))?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal | ViewMode::Compact => self.render_minimal(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}
