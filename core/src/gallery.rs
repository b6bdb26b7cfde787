use std::collections::HashSet;

use crate::item::ItemId;

#[derive(Clone, Debug, Default)]
pub struct GalleryHover {
    hovered: Option<ItemId>,
    broken_images: HashSet<ItemId>,
}

impl GalleryHover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    pub fn is_hovered(&self, id: ItemId) -> bool {
        self.hovered == Some(id)
    }

    pub fn on_hover_start(&mut self, id: ItemId) {
        self.hovered = Some(id);
    }

    pub fn on_hover_end(&mut self, id: ItemId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub fn on_image_error(&mut self, id: ItemId) -> bool {
        self.broken_images.insert(id)
    }

    pub fn shows_image(&self, id: ItemId) -> bool {
        !self.broken_images.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_hover_end_is_ignored() {
        let mut hover = GalleryHover::new();
        hover.on_hover_start(ItemId(1));
        hover.on_hover_start(ItemId(2));
        hover.on_hover_end(ItemId(1));
        assert_eq!(hover.hovered(), Some(ItemId(2)));
        hover.on_hover_end(ItemId(2));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn broken_image_falls_back_once() {
        let mut hover = GalleryHover::new();
        assert!(hover.shows_image(ItemId(4)));
        assert!(hover.on_image_error(ItemId(4)));
        assert!(!hover.on_image_error(ItemId(4)));
        assert!(!hover.shows_image(ItemId(4)));
    }
}
