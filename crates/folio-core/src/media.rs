//! Media-grid selection policy for the detail view.
//!
//! Evaluated from the item's current fields on every render, never cached:
//! a video wins outright; otherwise three or more images show as a grid;
//! otherwise the single thumbnail.

use folio_types::MediaRef;
use serde::Serialize;

/// Fewest images for which the full grid is shown
pub const GRID_MIN_IMAGES: usize = 3;

/// Media fields of an item that has a showcase.
pub trait Showcase {
    fn video(&self) -> Option<&str>;
    fn images(&self) -> &[String];
    fn thumbnail(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "media", rename_all = "lowercase")]
pub enum MediaSelection<'a> {
    Video(&'a str),
    Grid(&'a [String]),
    Thumbnail(&'a str),
    Nothing,
}

pub fn select_media<S: Showcase + ?Sized>(item: &S) -> MediaSelection<'_> {
    if let Some(video) = item.video() {
        return MediaSelection::Video(video);
    }
    let images = item.images();
    if images.len() >= GRID_MIN_IMAGES {
        return MediaSelection::Grid(images);
    }
    match item.thumbnail() {
        Some(thumbnail) => MediaSelection::Thumbnail(thumbnail),
        None => MediaSelection::Nothing,
    }
}

impl MediaSelection<'_> {
    /// Assets the lightbox can open. Videos play inline and are not zoomable.
    pub fn zoomable(&self) -> Vec<MediaRef> {
        match self {
            MediaSelection::Grid(images) => images.iter().map(MediaRef::new).collect(),
            MediaSelection::Thumbnail(url) => vec![MediaRef::new(*url)],
            MediaSelection::Video(_) | MediaSelection::Nothing => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fields {
        video: Option<String>,
        images: Vec<String>,
        thumbnail: Option<String>,
    }

    impl Showcase for Fields {
        fn video(&self) -> Option<&str> {
            self.video.as_deref()
        }
        fn images(&self) -> &[String] {
            &self.images
        }
        fn thumbnail(&self) -> Option<&str> {
            self.thumbnail.as_deref()
        }
    }

    fn fields(video: Option<&str>, images: &[&str], thumbnail: Option<&str>) -> Fields {
        Fields {
            video: video.map(String::from),
            images: images.iter().map(|s| s.to_string()).collect(),
            thumbnail: thumbnail.map(String::from),
        }
    }

    #[test]
    fn test_video_wins_over_grid() {
        let item = fields(Some("demo.mp4"), &["a", "b", "c"], Some("t"));
        assert_eq!(select_media(&item), MediaSelection::Video("demo.mp4"));
        assert!(select_media(&item).zoomable().is_empty());
    }

    #[test]
    fn test_two_images_fall_back_to_thumbnail() {
        let item = fields(None, &["a", "b"], Some("thumb.png"));
        assert_eq!(select_media(&item), MediaSelection::Thumbnail("thumb.png"));
        assert_eq!(
            select_media(&item).zoomable(),
            vec![MediaRef::new("thumb.png")]
        );
    }

    #[test]
    fn test_three_images_show_grid() {
        let item = fields(None, &["a", "b", "c"], Some("thumb.png"));
        let selection = select_media(&item);
        assert!(matches!(selection, MediaSelection::Grid(images) if images.len() == 3));
        assert_eq!(
            selection.zoomable(),
            vec![MediaRef::new("a"), MediaRef::new("b"), MediaRef::new("c")]
        );
    }

    #[test]
    fn test_nothing_without_any_media() {
        let item = fields(None, &[], None);
        assert_eq!(select_media(&item), MediaSelection::Nothing);
    }
}
