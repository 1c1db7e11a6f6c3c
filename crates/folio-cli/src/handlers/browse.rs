//! Interactive portfolio handler.
//!
//! The renderer runs on its own thread and owns all page state. This side
//! owns the I/O: every `Load` or `Submit` signal becomes one task on the
//! async runtime, whose result goes back tagged with the generation it was
//! requested for.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use folio_runtime::{ContactClient, Site, Source};
use folio_types::ContactMessage;
use is_terminal::IsTerminal;
use tokio::runtime::Runtime;

use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::renderers::tui::{Page, RendererSignal, TuiEvent, TuiRenderer};

use super::about;

/// Generation used for the navbar/footer profile fetch. Never matches a
/// mounted page, so the renderer only caches it.
const PROFILE_ONLY: u64 = u64::MAX;

pub fn handle(ctx: &ExecutionContext, start: Page) -> Result<()> {
    if !io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, printing the profile instead");
        return about::handle(ctx, ViewMode::Standard);
    }

    let ui = &ctx.config().ui;
    let theme = ui.theme;
    let tick = Duration::from_millis(ui.tick_ms.max(10));

    // Create channels for bidirectional communication
    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer (results)
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler (signals)

    let tui_handle = thread::spawn(move || {
        let renderer = TuiRenderer::new(start, theme, tick).with_signal_sender(signal_tx);
        renderer.run(event_rx)
    });

    let result = run_handler(ctx, start, event_tx, signal_rx);

    match tui_handle.join() {
        Ok(rendered) => rendered?,
        Err(e) => anyhow::bail!("interactive view panicked: {:?}", e),
    }

    result
}

fn run_handler(
    ctx: &ExecutionContext,
    start: Page,
    tx: Sender<TuiEvent>,
    signal_rx: Receiver<RendererSignal>,
) -> Result<()> {
    let runtime = ctx.runtime()?;

    if !shows_summary(start) {
        spawn_load(runtime, ctx.site(), Page::Home, PROFILE_ONLY, &tx);
    }

    // Blocks until the renderer asks for something or goes away
    while let Ok(signal) = signal_rx.recv() {
        match signal {
            RendererSignal::Load { page, generation } => {
                tracing::debug!(?page, generation, "loading page");
                spawn_load(runtime, ctx.site(), page, generation, &tx);
            }
            RendererSignal::Submit {
                generation,
                message,
            } => {
                let client = ctx
                    .contact_endpoint(None)
                    .and_then(|endpoint| Ok(ContactClient::new(endpoint)?))
                    .map_err(|e| e.to_string());
                spawn_submit(runtime, client, message, generation, &tx);
            }
            RendererSignal::Quit => break,
        }
    }

    Ok(())
}

fn shows_summary(page: Page) -> bool {
    matches!(page, Page::Home | Page::About | Page::Contact)
}

fn spawn_load(
    runtime: &Runtime,
    site: &Site<Source>,
    page: Page,
    generation: u64,
    tx: &Sender<TuiEvent>,
) {
    let site = site.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let event = match page {
            Page::Home | Page::About | Page::Contact => TuiEvent::Summary {
                generation,
                result: site.summary().await,
            },
            Page::Skills => TuiEvent::Skills {
                generation,
                result: site.skills().await,
            },
            Page::Projects => TuiEvent::Projects {
                generation,
                result: site.projects().await,
            },
            Page::Experience => TuiEvent::Experience {
                generation,
                result: site.experience().await,
            },
        };
        // The renderer may already be gone
        let _ = tx.send(event);
    });
}

fn spawn_submit(
    runtime: &Runtime,
    client: std::result::Result<ContactClient, String>,
    message: ContactMessage,
    generation: u64,
    tx: &Sender<TuiEvent>,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = match client {
            Ok(client) => client.submit(&message).await.map_err(|e| e.to_string()),
            Err(reason) => Err(reason),
        };
        if let Err(reason) = &result {
            tracing::warn!(generation, reason = %reason, "contact submission failed");
        }
        let _ = tx.send(TuiEvent::Submitted { generation, result });
    });
}
