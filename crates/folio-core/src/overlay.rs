//! Detail Overlay Controller
//!
//! Two-level modal stack on top of a catalog: item detail, and a zoomed
//! media asset inside it. The zoom layer only exists inside a detail layer,
//! so closing the detail can never leave an orphaned zoom behind.
//!
//! ```text
//! Closed --open--> DetailOpen --zoom--> DetailOpenZoomed
//!   ^                 |  ^                    |
//!   +------close------+  +-------unzoom-------+
//!   +-------------------close-----------------+
//! ```

use folio_types::{ItemId, MediaRef};
use serde::Serialize;

use crate::catalog::{CatalogItem, CatalogStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPhase {
    Closed,
    DetailOpen,
    DetailOpenZoomed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Layer {
    #[default]
    Closed,
    Detail(ItemId),
    Zoomed(ItemId, MediaRef),
}

/// Holds the inspected item by id, never by copy; reads resolve the id
/// against the owning [`CatalogStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    layer: Layer,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> OverlayPhase {
        match self.layer {
            Layer::Closed => OverlayPhase::Closed,
            Layer::Detail(_) => OverlayPhase::DetailOpen,
            Layer::Zoomed(..) => OverlayPhase::DetailOpenZoomed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase() != OverlayPhase::Closed
    }

    /// Show `item` in the detail layer.
    ///
    /// Replaces any current selection and always lands in `DetailOpen`,
    /// dropping a zoom that belonged to the previous item.
    pub fn open<T: CatalogItem>(&mut self, item: &T) {
        self.open_id(item.id().clone());
    }

    pub fn open_id(&mut self, id: ItemId) {
        self.layer = Layer::Detail(id);
    }

    /// Clear the detail selection and, with it, any zoom.
    pub fn close(&mut self) {
        self.layer = Layer::Closed;
    }

    /// Zoom into `media`. A no-op unless a detail is open.
    ///
    /// Returns whether the zoom was applied.
    pub fn zoom(&mut self, media: MediaRef) -> bool {
        let id = match &self.layer {
            Layer::Closed => return false,
            Layer::Detail(id) | Layer::Zoomed(id, _) => id.clone(),
        };
        self.layer = Layer::Zoomed(id, media);
        true
    }

    /// Clear the zoom only; the detail stays open.
    pub fn unzoom(&mut self) {
        if let Layer::Zoomed(id, _) = &self.layer {
            self.layer = Layer::Detail(id.clone());
        }
    }

    /// Backdrop click / escape: pop the topmost layer.
    pub fn dismiss(&mut self) -> OverlayPhase {
        match self.phase() {
            OverlayPhase::DetailOpenZoomed => self.unzoom(),
            OverlayPhase::DetailOpen => self.close(),
            OverlayPhase::Closed => {}
        }
        self.phase()
    }

    pub fn detail_id(&self) -> Option<&ItemId> {
        match &self.layer {
            Layer::Closed => None,
            Layer::Detail(id) | Layer::Zoomed(id, _) => Some(id),
        }
    }

    pub fn zoomed(&self) -> Option<&MediaRef> {
        match &self.layer {
            Layer::Zoomed(_, media) => Some(media),
            _ => None,
        }
    }

    /// Resolve the selection against the store that owns the items.
    pub fn selected<'a, T: CatalogItem>(&self, store: &'a CatalogStore<T>) -> Option<&'a T> {
        self.detail_id().and_then(|id| store.get(id))
    }

    /// Re-check the layers against the store after a reload: close when the
    /// selected item is gone, unzoom when the zoomed asset no longer belongs
    /// to it. Returns whether the overlay changed.
    pub fn reconcile<T: CatalogItem>(&mut self, store: &CatalogStore<T>) -> bool {
        if !self.is_open() {
            return false;
        }
        let Some(item) = self.selected(store) else {
            self.close();
            return true;
        };
        let stale_zoom = self
            .zoomed()
            .is_some_and(|media| !item.media().contains(media));
        if stale_zoom {
            self.unzoom();
        }
        stale_zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(url: &str) -> MediaRef {
        MediaRef::new(url)
    }

    #[test]
    fn test_open_then_zoom_then_close_clears_everything() {
        let mut overlay = DetailOverlay::new();
        overlay.open_id(ItemId::Number(1));
        assert!(overlay.zoom(media("x")));
        assert_eq!(overlay.phase(), OverlayPhase::DetailOpenZoomed);

        overlay.close();
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert_eq!(overlay.detail_id(), None);
        assert_eq!(overlay.zoomed(), None);
    }

    #[test]
    fn test_zoom_while_closed_is_noop() {
        let mut overlay = DetailOverlay::new();
        assert!(!overlay.zoom(media("x")));
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert_eq!(overlay.zoomed(), None);
    }

    #[test]
    fn test_unzoom_keeps_detail() {
        let mut overlay = DetailOverlay::new();
        overlay.open_id(ItemId::from("a"));
        overlay.zoom(media("shot.png"));
        overlay.unzoom();
        assert_eq!(overlay.phase(), OverlayPhase::DetailOpen);
        assert_eq!(overlay.detail_id(), Some(&ItemId::from("a")));
    }

    #[test]
    fn test_unzoom_without_zoom_changes_nothing() {
        let mut overlay = DetailOverlay::new();
        overlay.unzoom();
        assert_eq!(overlay.phase(), OverlayPhase::Closed);

        overlay.open_id(ItemId::from("a"));
        overlay.unzoom();
        assert_eq!(overlay.phase(), OverlayPhase::DetailOpen);
        assert_eq!(overlay.detail_id(), Some(&ItemId::from("a")));
    }

    #[test]
    fn test_open_replaces_and_resets_zoom() {
        let mut overlay = DetailOverlay::new();
        overlay.open_id(ItemId::Number(1));
        overlay.zoom(media("one.png"));

        overlay.open_id(ItemId::Number(2));
        assert_eq!(overlay.phase(), OverlayPhase::DetailOpen);
        assert_eq!(overlay.detail_id(), Some(&ItemId::Number(2)));
        assert_eq!(overlay.zoomed(), None);
    }

    #[test]
    fn test_zoom_replaces_zoom() {
        let mut overlay = DetailOverlay::new();
        overlay.open_id(ItemId::Number(1));
        overlay.zoom(media("a.png"));
        overlay.zoom(media("b.png"));
        assert_eq!(overlay.zoomed(), Some(&media("b.png")));
        assert_eq!(overlay.detail_id(), Some(&ItemId::Number(1)));
    }

    #[test]
    fn test_dismiss_pops_one_layer_at_a_time() {
        let mut overlay = DetailOverlay::new();
        overlay.open_id(ItemId::Number(1));
        overlay.zoom(media("a.png"));

        assert_eq!(overlay.dismiss(), OverlayPhase::DetailOpen);
        assert_eq!(overlay.dismiss(), OverlayPhase::Closed);
        assert_eq!(overlay.dismiss(), OverlayPhase::Closed);
    }

    #[derive(Clone, Copy)]
    enum Op {
        Open(i64),
        Zoom,
        Unzoom,
        Dismiss,
    }

    #[test]
    fn test_close_is_closed_from_every_state() {
        use Op::*;
        let sequences: [&[Op]; 5] = [
            &[],
            &[Open(1)],
            &[Open(1), Zoom],
            &[Zoom, Open(1), Zoom, Unzoom, Open(2), Zoom],
            &[Open(1), Zoom, Dismiss, Zoom, Open(3)],
        ];

        for ops in sequences {
            let mut overlay = DetailOverlay::new();
            for op in ops {
                match *op {
                    Open(id) => overlay.open_id(ItemId::Number(id)),
                    Zoom => {
                        overlay.zoom(MediaRef::new("z"));
                    }
                    Unzoom => overlay.unzoom(),
                    Dismiss => {
                        overlay.dismiss();
                    }
                }
                if overlay.zoomed().is_some() {
                    assert!(overlay.detail_id().is_some());
                }
            }
            overlay.close();
            assert_eq!(overlay.phase(), OverlayPhase::Closed);
            assert_eq!(overlay.zoomed(), None);
        }
    }
}
