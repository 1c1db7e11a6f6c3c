//! Projects page: filtered catalog with the detail/zoom overlay on top.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{
    CatalogItem, CatalogStore, DetailOverlay, LoadError, LoadState, OverlayPhase, Reveal,
    motion::PROJECT_STAGGER,
};
use folio_types::{MediaKind, MediaRef, Project};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::{
    clamp_selection, filter_line, popup_area, render_failed, render_loading, section_block,
};
use crate::presentation::presenters::{present_project_detail, present_project_list};
use crate::presentation::renderers::tui::theme::Theme;
use crate::presentation::view_models::{MediaViewModel, ProjectCardViewModel};
use crate::presentation::views::tech_line;

pub(crate) struct ProjectsComponent {
    store: CatalogStore<Project>,
    overlay: DetailOverlay,
    list: ListState,
    reveal: Reveal,
    /// Highlighted entry of the open item's zoomable media
    media_index: usize,
}

impl ProjectsComponent {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
            overlay: DetailOverlay::new(),
            list: ListState::default().with_selected(Some(0)),
            reveal: Reveal::new(PROJECT_STAGGER),
            media_index: 0,
        }
    }

    pub fn apply(&mut self, result: Result<Vec<Project>, LoadError>) {
        match self.store.apply(result) {
            Ok(count) => tracing::debug!(count, "projects ready"),
            Err(err) => tracing::warn!(error = %err, "projects unavailable"),
        }
        if self.overlay.reconcile(&self.store) {
            self.media_index = 0;
        }
    }

    /// Page teardown: drop every overlay layer before the page goes away.
    pub fn unmount(&mut self) {
        self.overlay.close();
        self.media_index = 0;
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &CatalogStore<Project> {
        &self.store
    }

    pub fn hints(&self) -> &'static str {
        match self.overlay.phase() {
            OverlayPhase::Closed => "[←/→] filter  [↑/↓] select  [Enter] details  [t] theme  [q] quit",
            OverlayPhase::DetailOpen => "[←/→] media  [z] zoom  [Esc] back  [x] close",
            OverlayPhase::DetailOpenZoomed => "[←/→] previous/next  [Esc] back  [x] close",
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match self.overlay.phase() {
            OverlayPhase::DetailOpenZoomed => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('z') => {
                    self.overlay.dismiss();
                }
                KeyCode::Char('x') => self.unmount(),
                KeyCode::Left | KeyCode::Char('h') => self.step_media(-1),
                KeyCode::Right | KeyCode::Char('l') => self.step_media(1),
                _ => {}
            },
            OverlayPhase::DetailOpen => match key.code {
                KeyCode::Esc => {
                    self.overlay.dismiss();
                    self.media_index = 0;
                }
                KeyCode::Char('x') => self.unmount(),
                KeyCode::Left | KeyCode::Char('h') => self.step_media(-1),
                KeyCode::Right | KeyCode::Char('l') => self.step_media(1),
                KeyCode::Enter | KeyCode::Char('z') => self.zoom_current(),
                _ => {}
            },
            OverlayPhase::Closed => match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.cycle_filter(-1),
                KeyCode::Right | KeyCode::Char('l') => self.cycle_filter(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    let len = self.store.filtered_len();
                    if len > 0 {
                        let next = self.list.selected().map_or(0, |i| (i + 1).min(len - 1));
                        self.list.select(Some(next));
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let prev = self.list.selected().map_or(0, |i| i.saturating_sub(1));
                    self.list.select(Some(prev));
                }
                KeyCode::Enter => self.open_selected(),
                _ => {}
            },
        }
    }

    fn cycle_filter(&mut self, delta: isize) {
        let next = self.store.filter().cycle(delta);
        if self.store.set_filter(next) {
            self.list.select(Some(0));
        }
    }

    fn open_selected(&mut self) {
        let index = self.list.selected().unwrap_or(0);
        if let Some(project) = self.store.filtered().nth(index) {
            self.overlay.open(project);
            self.media_index = 0;
        }
    }

    fn current_media(&self) -> Vec<MediaRef> {
        self.overlay
            .selected(&self.store)
            .map(|project| project.media())
            .unwrap_or_default()
    }

    fn step_media(&mut self, delta: isize) {
        let media = self.current_media();
        if media.is_empty() {
            return;
        }
        let len = media.len() as isize;
        self.media_index = (self.media_index as isize + delta).rem_euclid(len) as usize;
        if self.overlay.phase() == OverlayPhase::DetailOpenZoomed {
            self.overlay.zoom(media[self.media_index].clone());
        }
    }

    fn zoom_current(&mut self) {
        let media = self.current_media();
        if let Some(target) = media.get(self.media_index) {
            self.overlay.zoom(target.clone());
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let block = section_block("My Projects", theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        match self.store.state() {
            LoadState::Pending => return render_loading(f, inner, theme),
            LoadState::Failed(err) => return render_failed(f, inner, theme, "projects", err),
            LoadState::Ready => {}
        }

        let view = present_project_list(&self.store).content;
        self.reveal.track(&view.filter, view.projects.len(), now);
        let visible = self.reveal.visible(view.projects.len(), now);

        let [filters_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(inner);
        f.render_widget(Paragraph::new(filter_line(&view.filters, theme)), filters_area);

        if view.projects.is_empty() {
            f.render_widget(
                Paragraph::new(Span::styled("No projects found in this category.", theme.muted()))
                    .centered(),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = view
                .projects
                .iter()
                .take(visible)
                .map(|card| card_item(card, theme))
                .collect();
            clamp_selection(&mut self.list, items.len());
            let list = List::new(items)
                .highlight_style(theme.selected())
                .highlight_symbol("▌ ");
            f.render_stateful_widget(list, list_area, &mut self.list);
        }

        self.render_overlay(f, area, theme);
    }

    fn render_overlay(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(project) = self.overlay.selected(&self.store) else {
            return;
        };
        let detail = present_project_detail(project).content;

        let popup = popup_area(area, 80, 85);
        f.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent())
            .title(Span::styled(format!(" {} ", detail.title), theme.title()))
            .title_bottom(Line::from(Span::styled(" [Esc] back  [x] close ", theme.muted())));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let heading = theme.title();
        let mut lines: Vec<Line> = Vec::new();
        if !detail.subtitle.is_empty() {
            lines.push(Line::from(Span::styled(detail.subtitle.clone(), theme.muted())));
        }
        if let Some(status) = &detail.status {
            lines.push(Line::from(vec![
                Span::styled("Status: ", theme.muted()),
                Span::styled(status.clone(), Style::default().fg(theme.success)),
            ]));
        }
        lines.push(Line::default());

        match &detail.media {
            MediaViewModel::Video { url, poster } => {
                lines.push(Line::from(vec![
                    Span::styled("▶ Video  ", heading),
                    Span::raw(url.clone()),
                ]));
                if let Some(poster) = poster {
                    lines.push(Line::from(Span::styled(format!("  poster: {}", poster), theme.muted())));
                }
            }
            MediaViewModel::Grid { images } => {
                lines.push(Line::from(Span::styled("Gallery", heading)));
                for (i, image) in images.iter().enumerate() {
                    lines.push(self.media_line(i, image, theme));
                }
            }
            MediaViewModel::Thumbnail { url } => {
                lines.push(self.media_line(0, url, theme));
            }
            MediaViewModel::None => {}
        }

        if !detail.long_description.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(detail.long_description.clone()));
        }
        if !detail.features.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Key Features", heading)));
            for feature in &detail.features {
                lines.push(Line::from(format!("  • {}", feature)));
            }
        }
        if !detail.technologies.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Technologies Used", heading)));
            lines.push(Line::from(Span::styled(
                format!("  {}", detail.technologies.join(" · ")),
                theme.accent(),
            )));
        }
        if detail.github_url.is_some() || detail.live_url.is_some() {
            lines.push(Line::default());
        }
        if let Some(url) = &detail.github_url {
            lines.push(Line::from(vec![Span::styled("View Code  ", heading), Span::raw(url.clone())]));
        }
        if let Some(url) = &detail.live_url {
            lines.push(Line::from(vec![Span::styled("Live Demo  ", heading), Span::raw(url.clone())]));
        }

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

        if let Some(media) = self.overlay.zoomed() {
            render_zoom(f, area, media, self.media_index, self.current_media().len(), theme);
        }
    }

    fn media_line(&self, index: usize, url: &str, theme: &Theme) -> Line<'static> {
        let marker = if index == self.media_index { "▸" } else { " " };
        let style = if index == self.media_index {
            theme.selected()
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!("{} [{}] {}", marker, index + 1, url), style))
    }
}

fn card_item<'a>(card: &ProjectCardViewModel, theme: &Theme) -> ListItem<'a> {
    let mut title = vec![Span::styled(card.title.clone(), theme.title())];
    if card.featured {
        title.push(Span::styled(" ★", Style::default().fg(theme.accent)));
    }
    if let Some(category) = &card.category {
        title.push(Span::styled(format!("  [{}]", category), theme.muted()));
    }

    let mut lines = vec![Line::from(title)];
    if !card.description.is_empty() {
        lines.push(Line::from(Span::raw(card.description.clone())));
    }
    if !card.technologies.is_empty() {
        lines.push(Line::from(Span::styled(
            tech_line(&card.technologies, card.more_technologies),
            theme.muted().add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::default());
    ListItem::new(lines)
}

fn render_zoom(f: &mut Frame, area: Rect, media: &MediaRef, index: usize, total: usize, theme: &Theme) {
    let popup = popup_area(area, 60, 40);
    f.render_widget(Clear, popup);

    let kind = match media.kind() {
        MediaKind::Image => "Image",
        MediaKind::Video => "Video",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(Span::styled(format!(" {} {}/{} ", kind, index + 1, total.max(1)), theme.title()))
        .title_bottom(Line::from(Span::styled(" [Esc] back ", theme.muted())));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    f.render_widget(
        Paragraph::new(Line::from(media.url.clone()))
            .centered()
            .wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use folio_types::{CategoryFilter, ProjectCategory};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded() -> ProjectsComponent {
        let projects: Vec<Project> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Shop", "category": "Web", "thumbnail": "/shop.png",
                 "images": ["/a.png", "/b.png", "/c.png"]},
                {"id": 2, "title": "Tracker", "category": "Mobile", "thumbnail": "/t.png"}
            ]"#,
        )
        .unwrap();
        let mut page = ProjectsComponent::new();
        page.apply(Ok(projects));
        page
    }

    #[test]
    fn test_enter_zoom_escape_escape() {
        let mut page = loaded();
        page.handle_input(key(KeyCode::Enter));
        assert_eq!(page.overlay().phase(), OverlayPhase::DetailOpen);

        page.handle_input(key(KeyCode::Right));
        page.handle_input(key(KeyCode::Char('z')));
        assert_eq!(page.overlay().zoomed(), Some(&MediaRef::new("/b.png")));

        page.handle_input(key(KeyCode::Right));
        assert_eq!(page.overlay().zoomed(), Some(&MediaRef::new("/c.png")));

        page.handle_input(key(KeyCode::Esc));
        assert_eq!(page.overlay().phase(), OverlayPhase::DetailOpen);
        page.handle_input(key(KeyCode::Esc));
        assert_eq!(page.overlay().phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_close_from_zoom_clears_everything() {
        let mut page = loaded();
        page.handle_input(key(KeyCode::Enter));
        page.handle_input(key(KeyCode::Enter));
        assert_eq!(page.overlay().phase(), OverlayPhase::DetailOpenZoomed);

        page.handle_input(key(KeyCode::Char('x')));
        assert_eq!(page.overlay().phase(), OverlayPhase::Closed);
        assert!(page.overlay().zoomed().is_none());
    }

    #[test]
    fn test_filter_keys_ignored_while_detail_open() {
        let mut page = loaded();
        page.handle_input(key(KeyCode::Right));
        assert_eq!(page.store().filter(), CategoryFilter::Only(ProjectCategory::Web));

        page.handle_input(key(KeyCode::Enter));
        page.handle_input(key(KeyCode::Right));
        assert_eq!(page.store().filter(), CategoryFilter::Only(ProjectCategory::Web));
    }

    #[test]
    fn test_thumbnail_only_item_zooms_thumbnail() {
        let mut page = loaded();
        page.handle_input(key(KeyCode::Down));
        page.handle_input(key(KeyCode::Enter));
        page.handle_input(key(KeyCode::Char('z')));
        assert_eq!(page.overlay().zoomed(), Some(&MediaRef::new("/t.png")));
    }

    #[test]
    fn test_reload_without_item_closes_overlay() {
        let mut page = loaded();
        page.handle_input(key(KeyCode::Enter));
        page.apply(Ok(Vec::new()));
        assert_eq!(page.overlay().phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_unmount_closes_overlay() {
        let mut page = loaded();
        page.handle_input(key(KeyCode::Enter));
        page.handle_input(key(KeyCode::Enter));
        page.unmount();
        assert_eq!(page.overlay().phase(), OverlayPhase::Closed);
    }
}
