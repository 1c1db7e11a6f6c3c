pub mod category;
pub mod content;
pub mod error;
mod id;
mod media;

pub use category::{Category, CategoryFilter, ProjectCategory, SkillCategory};
pub use content::*;
pub use error::{Error, Result};
pub use id::ItemId;
pub use media::{MediaKind, MediaRef};
