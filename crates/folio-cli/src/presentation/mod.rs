//! # Presentation Layer
//!
//! Everything between a loaded document and the terminal.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(json)==> serde_json
//!                                                                         ==(plain)==> [ View ]
//!
//! [ Handler ] <==(channels)==> [ TuiRenderer ] --> [ App ] --> [ Component ] <-- keys
//! ```
//!
//! ## Rules
//!
//! * View models carry raw data (counts, percentages, urls), never
//!   formatted strings. `--format json` dumps them whole and ignores the
//!   view mode.
//! * `ViewMode` picks information density: minimal is ids only, compact is
//!   one line per item, standard is the human default, verbose shows every
//!   field.
//! * TUI components own their UI state (selection, scroll, overlay) and
//!   expose `handle_input`. The app routes keys and handler results; it does
//!   not decide page behaviour.
//! * Anything that needs I/O leaves the renderer as a [`renderers::RendererSignal`].

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
