//! Page state for the folio portfolio.
//!
//! Every content page follows the same shape: one load from a
//! [`ContentSource`] when the page is mounted, a [`CatalogStore`] (or a plain
//! [`Resource`]) holding the result, and for catalog pages a
//! [`DetailOverlay`] driven by user selection. Nothing here touches the
//! terminal or the network; callers feed results and clock readings in.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod media;
pub mod motion;
pub mod overlay;
pub mod resource;
pub mod source;

mod items;

pub use catalog::{CatalogItem, CatalogStore, LoadState, ensure_unique_ids};
pub use contact::{ContactField, ContactForm, FieldError, FieldProblem, FormStatus, NoticeKind};
pub use error::LoadError;
pub use media::{GRID_MIN_IMAGES, MediaSelection, Showcase, select_media};
pub use motion::{Reveal, Typewriter};
pub use overlay::{DetailOverlay, OverlayPhase};
pub use resource::Resource;
pub use source::{ContentSource, MemorySource, decode, fetch_document};
