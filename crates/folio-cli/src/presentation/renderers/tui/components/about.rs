use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{LoadError, Resource};
use folio_types::Summary;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{render_failed, render_loading, section_block};
use crate::presentation::presenters::present_profile;
use crate::presentation::renderers::tui::theme::Theme;

pub(crate) struct AboutComponent {
    summary: Resource<Summary>,
    scroll: u16,
}

impl AboutComponent {
    pub fn new() -> Self {
        Self {
            summary: Resource::Loading,
            scroll: 0,
        }
    }

    pub fn apply(&mut self, result: Result<Summary, LoadError>) {
        self.summary.settle(result);
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = section_block("About Me", theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let summary = match &self.summary {
            Resource::Loading => return render_loading(f, inner, theme),
            Resource::Failed(err) => return render_failed(f, inner, theme, "profile", err),
            Resource::Ready(summary) => summary,
        };
        let profile = present_profile(summary).content;
        let heading = theme.title().add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Who am I?", heading)),
            Line::from(profile.bio.clone()),
            Line::default(),
        ];

        if let Some(education) = &profile.education {
            lines.push(Line::from(Span::styled("Education", heading)));
            lines.push(Line::from(education.degree.clone()));
            let mut place = education.institution.clone();
            if !education.period.is_empty() {
                place.push_str(&format!(" ({})", education.period));
            }
            lines.push(Line::from(Span::styled(place, theme.muted())));
            if let Some(grade) = &education.grade {
                lines.push(Line::from(Span::styled(grade.clone(), theme.muted())));
            }
            lines.push(Line::default());
        }

        let details = [
            ("Location", Some(profile.location.as_str()).filter(|s| !s.is_empty())),
            ("Email", profile.email.as_deref()),
            ("Phone", profile.phone.as_deref()),
        ];
        for (label, value) in details {
            if let Some(value) = value {
                lines.push(Line::from(Span::styled(label, heading)));
                lines.push(Line::from(value.to_string()));
            }
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0)),
            inner,
        );
    }
}
