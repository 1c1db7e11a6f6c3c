//! Runtime layer for folio: configuration, the filesystem and HTTP content
//! sources, the [`Site`] loader and the contact submission client.

pub mod config;
pub mod contact;
pub mod error;
pub mod site;
pub mod source;

pub use config::{
    Config, ContentLocation, ThemeName, expand_tilde, resolve_config_path, resolve_content_location,
};
pub use contact::ContactClient;
pub use error::{Error, Result};
pub use site::{DocumentReport, LoadResult, Site, SkillSet};
pub use source::{FsSource, HttpSource, Source};
