use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusBadge, StatusLevel, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
    color: bool,
}

impl ConsoleRenderer {
    /// Colour follows whether stdout is a terminal.
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self {
            format,
            mode,
            color: io::stdout().is_terminal(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Text form of `result`, exactly as `render` prints it.
    pub fn to_text<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();
        if let Some(badge) = &result.badge {
            writeln!(out, "{}\n", self.badge_line(badge))?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() {
            let heading = if self.color {
                "Tips:".yellow().bold().to_string()
            } else {
                "Tips:".to_string()
            };
            writeln!(out, "\n{}", heading)?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }

    fn badge_line(&self, badge: &StatusBadge) -> String {
        if !self.color {
            return format!("{} {}", badge.icon(), badge.label);
        }
        let icon = match badge.level {
            StatusLevel::Success => badge.icon().green().to_string(),
            StatusLevel::Info => badge.icon().blue().to_string(),
            StatusLevel::Warning => badge.icon().yellow().to_string(),
            StatusLevel::Error => badge.icon().red().to_string(),
        };
        format!("{} {}", icon, badge.label.bold())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let text = self.to_text(&result)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{CheckViewModel, Guidance};

    fn result() -> CommandResultViewModel<CheckViewModel> {
        CommandResultViewModel::new(CheckViewModel {
            source: "public/data".to_string(),
            documents: Vec::new(),
        })
        .with_badge(StatusBadge::success("All 0 documents loaded"))
        .with_suggestion(Guidance::new("Run again").with_command("folio check"))
    }

    #[test]
    fn test_plain_text_without_color() {
        let text = ConsoleRenderer::new(OutputFormat::Text, ViewMode::Standard)
            .with_color(false)
            .to_text(&result())
            .unwrap();
        assert_eq!(
            text,
            "✓ All 0 documents loaded\n\nSource: public/data\n\n\nTips:\n  • Run again: folio check\n"
        );
    }

    #[test]
    fn test_json_skips_view() {
        let text = ConsoleRenderer::new(OutputFormat::Json, ViewMode::Standard)
            .to_text(&result())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["content"]["source"], "public/data");
        assert_eq!(value["badge"]["level"], "success");
        assert_eq!(value["suggestions"][0]["command"], "folio check");
    }
}
