use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{LoadError, Resource, Reveal, motion::EXPERIENCE_STAGGER};
use folio_types::ExperienceEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{render_failed, render_loading, section_block};
use crate::presentation::presenters::present_experience;
use crate::presentation::renderers::tui::theme::Theme;

pub(crate) struct ExperienceComponent {
    entries: Resource<Vec<ExperienceEntry>>,
    reveal: Reveal,
    scroll: u16,
}

impl ExperienceComponent {
    pub fn new() -> Self {
        Self {
            entries: Resource::Loading,
            reveal: Reveal::new(EXPERIENCE_STAGGER),
            scroll: 0,
        }
    }

    pub fn apply(&mut self, result: Result<Vec<ExperienceEntry>, LoadError>) {
        self.entries.settle(result);
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let block = section_block("Work Experience", theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let entries = match &self.entries {
            Resource::Loading => return render_loading(f, inner, theme),
            Resource::Failed(err) => return render_failed(f, inner, theme, "experience", err),
            Resource::Ready(entries) => entries,
        };
        let view = present_experience(entries).content;
        self.reveal.track("all", view.entries.len(), now);
        let visible = self.reveal.visible(view.entries.len(), now);

        let mut lines: Vec<Line> = Vec::new();
        for (i, entry) in view.entries.iter().take(visible).enumerate() {
            if i > 0 {
                lines.push(Line::from(Span::styled("│", theme.border())));
            }
            lines.push(Line::from(vec![
                Span::styled(format!("({}) ", entry.monogram), theme.title()),
                Span::styled(entry.title.clone(), theme.title()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("│ ", theme.border()),
                Span::styled(entry.company.clone(), theme.accent()),
            ]));

            let meta: Vec<&str> = [&entry.kind, &entry.location, &entry.duration]
                .into_iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect();
            if !meta.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("│ ", theme.border()),
                    Span::styled(meta.join(" · "), theme.muted()),
                ]));
            }
            if !entry.description.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("│ ", theme.border()),
                    Span::raw(entry.description.clone()),
                ]));
            }
            if !entry.responsibilities.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("│ ", theme.border()),
                    Span::styled("Key Responsibilities & Achievements", theme.title()),
                ]));
                for item in &entry.responsibilities {
                    lines.push(Line::from(vec![
                        Span::styled("│   • ", theme.border()),
                        Span::raw(item.clone()),
                    ]));
                }
            }
            if !entry.technologies.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("│ ", theme.border()),
                    Span::styled("Technologies Used: ", theme.title()),
                    Span::styled(entry.technologies.join(" · "), theme.accent()),
                ]));
            }
        }

        if view.entries.is_empty() {
            lines.push(Line::from(Span::styled("No experience entries yet.", theme.muted())));
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            inner,
        );
    }
}
