use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_runtime::ThemeName;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};

use super::components::{
    AboutComponent, ContactComponent, ExperienceComponent, HomeComponent, PageAction,
    ProjectsComponent, SkillsComponent, footer, navbar,
};
use super::event::{Page, RendererSignal, TuiEvent};
use super::theme::Theme;
use crate::presentation::presenters::present_profile;
use crate::presentation::view_models::ProfileViewModel;

/// The mounted page and the state it owns. Replacing it drops the state.
pub(crate) enum PageState {
    Home(HomeComponent),
    About(AboutComponent),
    Skills(SkillsComponent),
    Projects(ProjectsComponent),
    Experience(ExperienceComponent),
    Contact(ContactComponent),
}

impl PageState {
    fn mount(page: Page) -> Self {
        match page {
            Page::Home => PageState::Home(HomeComponent::new()),
            Page::About => PageState::About(AboutComponent::new()),
            Page::Skills => PageState::Skills(SkillsComponent::new()),
            Page::Projects => PageState::Projects(ProjectsComponent::new()),
            Page::Experience => PageState::Experience(ExperienceComponent::new()),
            Page::Contact => PageState::Contact(ContactComponent::new()),
        }
    }

    fn unmount(&mut self) {
        if let PageState::Projects(projects) = self {
            projects.unmount();
        }
    }
}

pub(crate) struct App {
    page: Page,
    state: PageState,
    /// Bumped on every mount; results for older generations are stale
    generation: u64,
    theme_name: ThemeName,
    theme: Theme,
    /// Last profile seen, for the navbar brand and footer links
    profile: Option<ProfileViewModel>,
    outbox: Vec<RendererSignal>,
    should_quit: bool,
}

impl App {
    pub fn new(start: Page, theme_name: ThemeName) -> Self {
        let mut app = Self {
            page: start,
            state: PageState::mount(start),
            generation: 0,
            theme_name,
            theme: Theme::from_name(theme_name),
            profile: None,
            outbox: Vec::new(),
            should_quit: false,
        };
        app.request_load();
        app
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn theme_name(&self) -> ThemeName {
        self.theme_name
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &PageState {
        &self.state
    }

    /// Signals queued for the handler since the last call
    pub fn take_signals(&mut self) -> Vec<RendererSignal> {
        std::mem::take(&mut self.outbox)
    }

    fn request_load(&mut self) {
        self.outbox.push(RendererSignal::Load {
            page: self.page,
            generation: self.generation,
        });
    }

    /// Switch pages: tear the old page down, mount a fresh one and ask for
    /// its document. Re-selecting the current page is a no-op.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.state.unmount();
        self.page = page;
        self.state = PageState::mount(page);
        self.generation += 1;
        tracing::debug!(page = page.title(), generation = self.generation, "page mounted");
        self.request_load();
    }

    fn quit(&mut self) {
        self.state.unmount();
        self.should_quit = true;
        self.outbox.push(RendererSignal::Quit);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // The contact form takes every printable key
        let typing = matches!(self.state, PageState::Contact(_))
            && matches!(key.code, KeyCode::Char(_));

        if !typing {
            match key.code {
                KeyCode::Char('q') => return self.quit(),
                KeyCode::Char('t') => {
                    self.theme_name = self.theme_name.toggled();
                    self.theme = Theme::from_name(self.theme_name);
                    return;
                }
                KeyCode::Tab => return self.navigate(self.page.cycle(1)),
                KeyCode::BackTab => return self.navigate(self.page.cycle(-1)),
                KeyCode::Char(c @ '1'..='6') => {
                    let index = c as usize - '1' as usize;
                    return self.navigate(Page::ALL[index]);
                }
                _ => {}
            }
        }

        let action = match &mut self.state {
            PageState::Home(home) => home.handle_input(key),
            PageState::About(about) => {
                about.handle_input(key);
                None
            }
            PageState::Skills(skills) => {
                skills.handle_input(key);
                None
            }
            PageState::Projects(projects) => {
                projects.handle_input(key);
                None
            }
            PageState::Experience(experience) => {
                experience.handle_input(key);
                None
            }
            PageState::Contact(contact) => contact.handle_input(key),
        };

        match action {
            Some(PageAction::Navigate(page)) => self.navigate(page),
            Some(PageAction::Submit(message)) => self.outbox.push(RendererSignal::Submit {
                generation: self.generation,
                message,
            }),
            None => {}
        }
    }

    /// Apply a handler result. Results for a page that is no longer
    /// mounted are dropped.
    pub fn apply(&mut self, event: TuiEvent, now: Instant) {
        if let TuiEvent::Summary {
            result: Ok(summary),
            ..
        } = &event
        {
            self.profile = Some(present_profile(summary).content);
        }

        if event.generation() != self.generation {
            tracing::debug!(
                generation = event.generation(),
                current = self.generation,
                "dropping stale result"
            );
            return;
        }

        match (&mut self.state, event) {
            (PageState::Home(home), TuiEvent::Summary { result, .. }) => home.apply(result),
            (PageState::About(about), TuiEvent::Summary { result, .. }) => about.apply(result),
            (PageState::Contact(contact), TuiEvent::Summary { result, .. }) => {
                contact.apply(result)
            }
            (PageState::Contact(contact), TuiEvent::Submitted { result, .. }) => {
                contact.submitted(result, now)
            }
            (PageState::Skills(skills), TuiEvent::Skills { result, .. }) => skills.apply(result),
            (PageState::Projects(projects), TuiEvent::Projects { result, .. }) => {
                projects.apply(result)
            }
            (PageState::Experience(experience), TuiEvent::Experience { result, .. }) => {
                experience.apply(result)
            }
            (_, other) => tracing::warn!(?other, "result does not match the mounted page"),
        }
    }

    pub fn tick(&mut self, elapsed: Duration, now: Instant) {
        match &mut self.state {
            PageState::Home(home) => home.tick(elapsed),
            PageState::Contact(contact) => contact.tick(now),
            _ => {}
        }
    }

    fn hints(&self) -> &'static str {
        match &self.state {
            PageState::Projects(projects) => projects.hints(),
            PageState::Skills(_) => "[←/→] filter  [↑/↓] scroll  [Tab] next page  [t] theme  [q] quit",
            PageState::Contact(_) => "[↑/↓] field  [Enter] send  [Tab] next page  [Ctrl-C] quit",
            PageState::Home(_) => "[Enter] projects  [c] contact  [Tab] next page  [t] theme  [q] quit",
            _ => "[↑/↓] scroll  [Tab] next page  [1-6] jump  [t] theme  [q] quit",
        }
    }

    pub fn render(&mut self, f: &mut Frame, now: Instant) {
        let area = f.area();
        let theme = self.theme;
        f.render_widget(Block::default().style(theme.base()), area);

        let [nav_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .areas(area);

        let brand = self
            .profile
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "folio".to_string());
        navbar::render(f, nav_area, &brand, self.page, self.theme_name, &theme);

        match &mut self.state {
            PageState::Home(home) => home.render(f, body_area, &theme),
            PageState::About(about) => about.render(f, body_area, &theme),
            PageState::Skills(skills) => skills.render(f, body_area, &theme, now),
            PageState::Projects(projects) => projects.render(f, body_area, &theme, now),
            PageState::Experience(experience) => experience.render(f, body_area, &theme, now),
            PageState::Contact(contact) => contact.render(f, body_area, &theme),
        }

        footer::render(f, footer_area, self.profile.as_ref(), self.hints(), &theme);
    }
}
