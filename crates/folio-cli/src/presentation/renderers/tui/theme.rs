use folio_runtime::ThemeName;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
    pub background: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                highlight: Color::Rgb(40, 44, 52),
                success: Color::Green,
                error: Color::Red,
                background: Color::Reset,
            },
            ThemeName::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                highlight: Color::Rgb(225, 230, 240),
                success: Color::Rgb(0, 128, 0),
                error: Color::Rgb(200, 0, 0),
                background: Color::Rgb(250, 250, 250),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}
