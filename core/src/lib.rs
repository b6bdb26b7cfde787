pub mod content;
pub mod deck;
pub mod frame;
pub mod gallery;
pub mod item;
pub mod parallax;
pub mod reveal;
pub mod tilt;

pub use deck::{
    compute_transform, replay, spread_slot, CardDeck, DeckError, DeckEvent, DeckState,
    DeckTransition, LayoutTransform, SpreadSlot,
};
pub use frame::FrameGate;
pub use gallery::GalleryHover;
pub use item::{DisplayItem, GalleryItem, ItemId, SkillTile, TileId};
pub use parallax::{parallax_offset, ParallaxLayer, ParallaxTracker};
pub use reveal::{intersects_viewport, RevealLatch, RevealSchedule};
pub use tilt::{tilt_for_pointer, PointerTilt, Tilt, TileMeasure, TileRect, TiltError, TiltHover};
