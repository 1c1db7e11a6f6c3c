use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::{ContactField, ContactForm, LoadError, NoticeKind, Resource};
use folio_types::Summary;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{PageAction, render_failed, render_loading, section_block};
use crate::presentation::presenters::present_profile;
use crate::presentation::renderers::tui::theme::Theme;

pub(crate) struct ContactComponent {
    summary: Resource<Summary>,
    form: ContactForm,
}

impl ContactComponent {
    pub fn new() -> Self {
        Self {
            summary: Resource::Loading,
            form: ContactForm::new(),
        }
    }

    pub fn apply(&mut self, result: Result<Summary, LoadError>) {
        self.summary.settle(result);
    }

    pub fn submitted(&mut self, result: Result<(), String>, now: Instant) {
        self.form.finish_submit(result, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Printable keys go into the focused field; `Enter` submits.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<PageAction> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c);
                None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Down => {
                self.form.focus_next();
                None
            }
            KeyCode::Up => {
                self.form.focus_prev();
                None
            }
            KeyCode::Enter => match self.form.begin_submit() {
                Ok(message) => Some(PageAction::Submit(message)),
                Err(errors) => {
                    if let Some(first) = errors.first() {
                        self.form.set_focus(first.field);
                    }
                    None
                }
            },
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = section_block("Get In Touch", theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let summary = match &self.summary {
            Resource::Loading => return render_loading(f, inner, theme),
            Resource::Failed(err) => return render_failed(f, inner, theme, "contact details", err),
            Resource::Ready(summary) => summary,
        };
        let profile = present_profile(summary).content;

        let [info_area, form_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(inner);

        let heading = theme.title();
        let mut info = vec![
            Line::from(Span::styled("Let's discuss your next project", theme.muted())),
            Line::default(),
        ];
        let entries = [
            ("Email", profile.email.as_deref()),
            ("Phone", profile.phone.as_deref()),
            ("Location", Some(profile.location.as_str()).filter(|s| !s.is_empty())),
            ("GitHub", profile.github.as_deref()),
            ("LinkedIn", profile.linkedin.as_deref()),
        ];
        for (label, value) in entries {
            if let Some(value) = value {
                info.push(Line::from(Span::styled(label, heading)));
                info.push(Line::from(value.to_string()));
                info.push(Line::default());
            }
        }
        f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), info_area);

        self.render_form(f, form_area, theme);
    }

    fn render_form(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut constraints: Vec<Constraint> = ContactField::ALL
            .iter()
            .map(|field| match field {
                ContactField::Message => Constraint::Min(5),
                _ => Constraint::Length(3),
            })
            .collect();
        constraints.push(Constraint::Length(2));
        let rows = Layout::vertical(constraints).split(area);

        for (i, field) in ContactField::ALL.iter().enumerate() {
            let focused = self.form.focus() == *field;
            let error = self.form.errors().iter().find(|e| e.field == *field);

            let border = match (focused, error) {
                (_, Some(_)) => Style::default().fg(theme.error),
                (true, None) => theme.accent(),
                (false, None) => theme.border(),
            };
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(format!(" {} ", field.label()), border));
            if let Some(error) = error {
                block = block.title_bottom(Line::from(Span::styled(
                    format!(" {} ", error),
                    Style::default().fg(theme.error),
                )));
            }

            let value = self.form.value(*field);
            let content = if value.is_empty() && !focused {
                Line::from(Span::styled(field.placeholder(), theme.muted()))
            } else if focused {
                Line::from(vec![
                    Span::raw(value.to_string()),
                    Span::styled("▏", theme.accent().add_modifier(Modifier::SLOW_BLINK)),
                ])
            } else {
                Line::from(value.to_string())
            };

            f.render_widget(
                Paragraph::new(content).wrap(Wrap { trim: false }).block(block),
                rows[i],
            );
        }

        let status = match self.form.notice() {
            Some((kind, text)) => {
                let color = match kind {
                    NoticeKind::Loading => theme.accent,
                    NoticeKind::Success => theme.success,
                    NoticeKind::Error => theme.error,
                };
                Line::from(Span::styled(text, Style::default().fg(color)))
            }
            None => Line::from(Span::styled(
                "[Enter] Send Message  [↑/↓] field",
                theme.muted(),
            )),
        };
        f.render_widget(Paragraph::new(status), rows[ContactField::ALL.len()]);
    }
}
