//! Interactive renderer.
//!
//! Runs on its own thread. It owns the page state and all UI state, and
//! never performs I/O: loads and submissions are requested from the
//! handler through [`RendererSignal`]s, and their results come back as
//! [`TuiEvent`]s tagged with the mount generation they belong to.

mod app;
mod components;
mod event;
mod theme;

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self as term, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_runtime::ThemeName;
use ratatui::{Terminal, backend::CrosstermBackend};

use app::App;
pub use event::{Page, RendererSignal, TuiEvent};

pub struct TuiRenderer {
    app: App,
    tick: Duration,
    signal_tx: Option<Sender<RendererSignal>>,
}

impl TuiRenderer {
    pub fn new(start: Page, theme: ThemeName, tick: Duration) -> Self {
        Self {
            app: App::new(start, theme),
            tick: tick.max(Duration::from_millis(10)),
            signal_tx: None,
        }
    }

    pub fn with_signal_sender(mut self, tx: Sender<RendererSignal>) -> Self {
        self.signal_tx = Some(tx);
        self
    }

    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        // Always tell the handler we are gone, even on error
        self.send(RendererSignal::Quit);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            self.flush_signals();

            let now = Instant::now();
            terminal.draw(|f| self.app.render(f, now))?;

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if term::poll(timeout)?
                && let Event::Key(key) = term::read()?
                && key.kind == KeyEventKind::Press
            {
                self.app.handle_key(key);
            }

            loop {
                match rx.try_recv() {
                    Ok(event) => self.app.apply(event, Instant::now()),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        tracing::warn!("handler went away");
                        return Ok(());
                    }
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= self.tick {
                self.app.tick(elapsed, Instant::now());
                last_tick = Instant::now();
            }

            if self.app.should_quit() {
                self.flush_signals();
                return Ok(());
            }
        }
    }

    fn flush_signals(&mut self) {
        for signal in self.app.take_signals() {
            self.send(signal);
        }
    }

    fn send(&self, signal: RendererSignal) {
        if let Some(tx) = &self.signal_tx {
            // The handler may already be gone on shutdown
            let _ = tx.send(signal);
        }
    }
}
