use chrono::Datelike;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::renderers::tui::theme::Theme;
use crate::presentation::view_models::ProfileViewModel;

pub(crate) fn copyright_line(year: i32) -> String {
    format!("© {} All rights reserved", year)
}

/// Social links and copyright, plus the key hints for the current context
pub(crate) fn render(f: &mut Frame, area: Rect, profile: Option<&ProfileViewModel>, hints: &str, theme: &Theme) {
    let mut links: Vec<Span> = Vec::new();
    if let Some(profile) = profile {
        let entries = [
            ("GitHub", profile.github.as_deref()),
            ("LinkedIn", profile.linkedin.as_deref()),
            ("Email", profile.email.as_deref()),
        ];
        for (label, value) in entries {
            if let Some(value) = value {
                if !links.is_empty() {
                    links.push(Span::styled("  ·  ", theme.muted()));
                }
                links.push(Span::styled(format!("{}: ", label), theme.muted()));
                links.push(Span::styled(value.to_string(), theme.accent()));
            }
        }
    }

    let year = chrono::Local::now().year();
    let mut lines = Vec::with_capacity(3);
    if !links.is_empty() {
        lines.push(Line::from(links));
    }
    lines.push(Line::from(Span::styled(copyright_line(year), theme.muted())));
    lines.push(Line::from(Span::styled(hints.to_string(), theme.muted())));

    let footer = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border()),
    );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 2026 All rights reserved");
    }
}
