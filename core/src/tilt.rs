use std::collections::HashMap;
use std::fmt;

use crate::frame::FrameGate;
use crate::item::{SkillTile, TileId};

pub const TILT_SENSITIVITY_DEG: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TileRect {
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    pub const ZERO: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltHover {
    NoHover,
    Hovering(TileId),
}

impl fmt::Display for TiltHover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiltHover::NoHover => f.write_str("NoHover"),
            TiltHover::Hovering(id) => write!(f, "Hovering({id})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TiltError {
    UnknownTile { id: TileId },
}

impl fmt::Display for TiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiltError::UnknownTile { id } => write!(f, "no tile with id {id} in the grid"),
        }
    }
}

impl std::error::Error for TiltError {}

/// Source of tile bounding boxes, in the same coordinate space as the
/// pointer samples. `None` means the tile is not laid out yet.
pub trait TileMeasure {
    fn tile_rect(&self, id: TileId) -> Option<TileRect>;
}

impl TileMeasure for HashMap<TileId, TileRect> {
    fn tile_rect(&self, id: TileId) -> Option<TileRect> {
        self.get(&id).copied()
    }
}

/// Rotation for a pointer over `rect`.
///
/// Offsets are normalized by the tile size on each axis. `rotate_y_deg`
/// follows the horizontal offset and `rotate_x_deg` the vertical one, in CSS
/// `rotateX` terms: a pointer below the center gives a positive angle, which
/// tips the top edge away from the viewer.
pub fn tilt_for_pointer(rect: TileRect, pointer: (f32, f32)) -> Tilt {
    if !rect.is_measured() {
        return Tilt::ZERO;
    }
    let (cx, cy) = rect.center();
    let nx = (pointer.0 - cx) / rect.width;
    let ny = (pointer.1 - cy) / rect.height;
    Tilt {
        rotate_x_deg: ny * TILT_SENSITIVITY_DEG,
        rotate_y_deg: nx * TILT_SENSITIVITY_DEG,
    }
}

#[derive(Clone, Debug)]
pub struct PointerTilt {
    tiles: Vec<TileId>,
    hover: TiltHover,
    pointer: Option<(f32, f32)>,
    moves: FrameGate<(f32, f32)>,
}

impl PointerTilt {
    pub fn new(tiles: Vec<TileId>) -> Self {
        Self {
            tiles,
            hover: TiltHover::NoHover,
            pointer: None,
            moves: FrameGate::new(),
        }
    }

    pub fn from_tiles(tiles: &[SkillTile]) -> Self {
        Self::new(tiles.iter().map(|tile| tile.id).collect())
    }

    pub fn hover(&self) -> TiltHover {
        self.hover
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    pub fn is_hovered(&self, id: TileId) -> bool {
        self.hover == TiltHover::Hovering(id)
    }

    /// Queues a container-relative pointer sample. Returns true when the
    /// caller has to request an animation frame to commit it.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.moves.offer((x, y))
    }

    /// Commits the newest queued sample. Returns true if the committed
    /// pointer position changed.
    pub fn on_animation_frame(&mut self) -> bool {
        let Some(sample) = self.moves.take() else {
            return false;
        };
        let changed = self.pointer != Some(sample);
        self.pointer = Some(sample);
        changed
    }

    pub fn on_tile_hover_start(&mut self, id: TileId) -> Result<TiltHover, TiltError> {
        if !self.tiles.contains(&id) {
            return Err(TiltError::UnknownTile { id });
        }
        self.hover = TiltHover::Hovering(id);
        Ok(self.hover)
    }

    /// Ends the hover of `id`. A stale end for a tile that is no longer the
    /// active one is ignored.
    pub fn on_tile_hover_end(&mut self, id: TileId) -> TiltHover {
        if self.hover == TiltHover::Hovering(id) {
            self.hover = TiltHover::NoHover;
        }
        self.hover
    }

    pub fn on_pointer_leave(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.hover = TiltHover::NoHover;
        self.pointer = None;
        self.moves.cancel();
    }

    pub fn compute_tilt(&self, id: TileId, measure: &impl TileMeasure) -> Tilt {
        if !self.is_hovered(id) {
            return Tilt::ZERO;
        }
        let Some(pointer) = self.pointer else {
            return Tilt::ZERO;
        };
        let Some(rect) = measure.tile_rect(id) else {
            return Tilt::ZERO;
        };
        tilt_for_pointer(rect, pointer)
    }
}
