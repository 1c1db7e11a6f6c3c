// Views contain the text formatting for view models at each density.
// TUI widgets live under renderers::tui and share the same view models.

pub mod check;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;

pub use check::*;
pub use contact::*;
pub use experience::*;
pub use profile::*;
pub use project::*;
pub use skill::*;

use crate::presentation::view_models::FilterOptionViewModel;
use std::fmt;

/// `[All 5]  Web 3  Mobile 2  Other 0`, active option bracketed
pub(crate) fn write_filter_bar(f: &mut fmt::Formatter, filters: &[FilterOptionViewModel]) -> fmt::Result {
    let parts: Vec<String> = filters
        .iter()
        .map(|option| {
            if option.active {
                format!("[{} {}]", option.label, option.count)
            } else {
                format!("{} {}", option.label, option.count)
            }
        })
        .collect();
    writeln!(f, "{}", parts.join("  "))
}

/// Technologies with the "+N" overflow marker cards use
pub(crate) fn tech_line(technologies: &[String], more: usize) -> String {
    let mut line = technologies.join(", ");
    if more > 0 {
        line.push_str(&format!(" +{}", more));
    }
    line
}
