//! Page components.
//!
//! Each page owns its state (store, overlay, form) and its UI state
//! (selection, scroll). Input handling returns an action only when the
//! parent has to react.

use folio_core::LoadError;
use folio_types::ContactMessage;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::event::Page;
use super::theme::Theme;
use crate::presentation::view_models::FilterOptionViewModel;

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod experience;
pub(crate) mod footer;
pub(crate) mod home;
pub(crate) mod navbar;
pub(crate) mod projects;
pub(crate) mod skills;

pub(crate) use about::AboutComponent;
pub(crate) use contact::ContactComponent;
pub(crate) use experience::ExperienceComponent;
pub(crate) use home::HomeComponent;
pub(crate) use projects::ProjectsComponent;
pub(crate) use skills::SkillsComponent;

/// Actions a page can emit to the app
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PageAction {
    Navigate(Page),
    Submit(ContactMessage),
}

pub(crate) fn render_loading(f: &mut Frame, area: Rect, theme: &Theme) {
    let loading = Paragraph::new(Line::from(Span::styled("Loading...", theme.muted())))
        .centered()
        .block(Block::default());
    f.render_widget(loading, area);
}

pub(crate) fn render_failed(f: &mut Frame, area: Rect, theme: &Theme, what: &str, err: &LoadError) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Could not load {}", what),
            ratatui::style::Style::default().fg(theme.error),
        )),
        Line::from(Span::styled(err.to_string(), theme.muted())),
    ];
    f.render_widget(
        Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
        area,
    );
}

/// Heading block shared by the content pages
pub(crate) fn section_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(format!(" {} ", title), theme.title()))
}

/// `All (5)  Web (3)  ...` with the active option highlighted
pub(crate) fn filter_line<'a>(filters: &'a [FilterOptionViewModel], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(filters.len() * 2);
    for (i, option) in filters.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if option.active {
            theme.selected().fg(theme.accent)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(format!(" {} ({}) ", option.label, option.count), style));
    }
    Line::from(spans)
}

/// Centered popup area, `percent_x` by `percent_y` of `area`
pub(crate) fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Keep a list selection inside `len`
pub(crate) fn clamp_selection(state: &mut ratatui::widgets::ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::ListState;

    #[test]
    fn test_clamp_selection() {
        let mut state = ListState::default();
        clamp_selection(&mut state, 3);
        assert_eq!(state.selected(), Some(0));

        state.select(Some(7));
        clamp_selection(&mut state, 3);
        assert_eq!(state.selected(), Some(2));

        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_popup_area_is_centered() {
        let area = popup_area(Rect::new(0, 0, 100, 40), 60, 50);
        assert_eq!(area, Rect::new(20, 10, 60, 20));
    }
}
