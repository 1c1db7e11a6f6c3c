use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{LoadError, Resource, Typewriter};
use folio_types::Summary;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{PageAction, render_failed, render_loading};
use crate::presentation::presenters::present_profile;
use crate::presentation::renderers::tui::event::Page;
use crate::presentation::renderers::tui::theme::Theme;

pub(crate) struct HomeComponent {
    summary: Resource<Summary>,
    typewriter: Typewriter,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            summary: Resource::Loading,
            typewriter: Typewriter::new(Vec::new()),
        }
    }

    pub fn apply(&mut self, result: Result<Summary, LoadError>) {
        if let Ok(summary) = &result {
            self.typewriter = Typewriter::new(summary.taglines.clone());
        }
        self.summary.settle(result);
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.typewriter.advance(elapsed);
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<PageAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') => Some(PageAction::Navigate(Page::Projects)),
            KeyCode::Char('c') => Some(PageAction::Navigate(Page::Contact)),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let summary = match &self.summary {
            Resource::Loading => return render_loading(f, area, theme),
            Resource::Failed(err) => return render_failed(f, area, theme, "profile", err),
            Resource::Ready(summary) => summary,
        };
        let profile = present_profile(summary).content;

        let mut lines = vec![
            Line::from(Span::styled("Hi, I'm", theme.muted())),
            Line::from(Span::styled(
                profile.name.clone(),
                theme.title().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(vec![
                Span::styled(self.typewriter.visible().to_string(), theme.accent()),
                Span::styled("▌", theme.accent().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Line::default(),
        ];
        if !profile.bio.is_empty() {
            lines.push(Line::from(profile.bio.clone()));
            lines.push(Line::default());
        }

        let mut buttons = vec![
            Span::styled(" [Enter] View Projects ", theme.selected().fg(theme.accent)),
            Span::raw("  "),
            Span::styled(" [c] Contact ", theme.muted()),
        ];
        if let Some(resume) = &profile.resume_url {
            buttons.push(Span::raw("  "));
            buttons.push(Span::styled(format!(" Resume: {} ", resume), theme.muted()));
        }
        lines.push(Line::from(buttons));

        let height = (lines.len() as u16 + 4).min(area.height);
        let [content] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [content] = Layout::horizontal([Constraint::Max(90)])
            .flex(Flex::Center)
            .areas(content);

        f.render_widget(
            Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
            content,
        );
    }
}
