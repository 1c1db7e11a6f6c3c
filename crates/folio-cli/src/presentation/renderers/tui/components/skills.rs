use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{CatalogStore, LoadError, LoadState, Reveal, motion::SKILL_STAGGER};
use folio_runtime::SkillSet;
use folio_types::Skill;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::{clamp_selection, filter_line, render_failed, render_loading, section_block};
use crate::presentation::presenters::{count_line, present_skill_list};
use crate::presentation::renderers::tui::theme::Theme;
use crate::presentation::views::proficiency_bar;

pub(crate) struct SkillsComponent {
    store: CatalogStore<Skill>,
    soft_skills: Vec<String>,
    reveal: Reveal,
    list: ListState,
}

impl SkillsComponent {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
            soft_skills: Vec::new(),
            reveal: Reveal::new(SKILL_STAGGER),
            list: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn apply(&mut self, result: Result<SkillSet, LoadError>) {
        let result = result.map(|set| {
            self.soft_skills = set.soft_skills;
            set.skills
        });
        if let Err(err) = self.store.apply(result) {
            tracing::warn!(error = %err, "skills unavailable");
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &CatalogStore<Skill> {
        &self.store
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        let delta = match key.code {
            KeyCode::Left | KeyCode::Char('h') => -1,
            KeyCode::Right | KeyCode::Char('l') => 1,
            KeyCode::Down | KeyCode::Char('j') => {
                let next = self.list.selected().map_or(0, |i| i + 1);
                self.list.select(Some(next));
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let prev = self.list.selected().map_or(0, |i| i.saturating_sub(1));
                self.list.select(Some(prev));
                return;
            }
            _ => return,
        };
        let next = self.store.filter().cycle(delta);
        if self.store.set_filter(next) {
            self.list.select(Some(0));
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let block = section_block("Skills & Expertise", theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        match self.store.state() {
            LoadState::Pending => return render_loading(f, inner, theme),
            LoadState::Failed(err) => return render_failed(f, inner, theme, "skills", err),
            LoadState::Ready => {}
        }

        let view = present_skill_list(&self.store, &self.soft_skills).content;
        self.reveal.track(&view.filter, view.skills.len(), now);
        let visible = self.reveal.visible(view.skills.len(), now);

        let soft_height = if view.soft_skills.is_empty() {
            0
        } else {
            view.soft_skills.len().div_ceil(3) as u16 + 3
        };
        let [filters_area, count_area, list_area, soft_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(soft_height),
        ])
        .areas(inner);

        f.render_widget(Paragraph::new(filter_line(&view.filters, theme)), filters_area);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(count_line(&view), theme.muted()))),
            count_area,
        );

        let items: Vec<ListItem> = view
            .skills
            .iter()
            .take(visible)
            .map(|skill| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", skill.monogram), theme.title()),
                    Span::raw(format!("{:<20}", skill.name)),
                    Span::styled(proficiency_bar(skill.proficiency), theme.accent()),
                    Span::raw(format!(" {:>3}%  ", skill.proficiency)),
                    Span::styled(skill.level.clone(), theme.muted()),
                ]))
            })
            .collect();
        clamp_selection(&mut self.list, items.len());
        let list = List::new(items).highlight_style(theme.selected());
        f.render_stateful_widget(list, list_area, &mut self.list);

        if !view.soft_skills.is_empty() {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Professional Skills", theme.title()),
                    Span::styled(" – Core competencies that drive success", theme.muted()),
                ]),
                Line::default(),
            ];
            for chunk in view.soft_skills.chunks(3) {
                let row: Vec<String> = chunk.iter().map(|s| format!("• {:<24}", s)).collect();
                lines.push(Line::from(row.join("")));
            }
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), soft_area);
        }
    }
}
