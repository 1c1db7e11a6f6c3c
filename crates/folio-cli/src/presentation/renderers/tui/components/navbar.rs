use folio_runtime::ThemeName;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::presentation::renderers::tui::event::Page;
use crate::presentation::renderers::tui::theme::Theme;

pub(crate) fn render(
    f: &mut Frame,
    area: Rect,
    brand: &str,
    page: Page,
    theme_name: ThemeName,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [brand_area, tabs_area, toggle_area] = Layout::horizontal([
        Constraint::Length(brand.chars().count() as u16 + 2),
        Constraint::Min(10),
        Constraint::Length(10),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(brand, theme.title()))),
        brand_area,
    );

    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!("{} {}", i + 1, p.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(page.index())
        .style(theme.muted())
        .highlight_style(theme.title())
        .divider(" ");
    f.render_widget(tabs, tabs_area);

    let toggle = match theme_name {
        ThemeName::Dark => "[t] ☾",
        ThemeName::Light => "[t] ☀",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(toggle, theme.muted()))).right_aligned(),
        toggle_area,
    );
}
