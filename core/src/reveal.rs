/// Timing for a container whose children animate in one after another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSchedule {
    pub delay_children_s: f32,
    pub stagger_s: f32,
    pub duration_s: f32,
    pub rise_px: f32,
}

impl RevealSchedule {
    pub fn child_delay(&self, index: usize) -> f32 {
        self.delay_children_s + index as f32 * self.stagger_s
    }
}

pub const FADE_IN_UP: RevealSchedule = RevealSchedule {
    delay_children_s: 0.0,
    stagger_s: 0.0,
    duration_s: 0.5,
    rise_px: 20.0,
};

pub const STAGGER_GRID: RevealSchedule = RevealSchedule {
    delay_children_s: 0.2,
    stagger_s: 0.1,
    duration_s: 0.5,
    rise_px: 20.0,
};

pub const HERO_INTRO: RevealSchedule = RevealSchedule {
    delay_children_s: 0.3,
    stagger_s: 0.2,
    duration_s: 0.5,
    rise_px: 20.0,
};

pub const GALLERY_GRID: RevealSchedule = RevealSchedule {
    delay_children_s: 0.0,
    stagger_s: 0.1,
    duration_s: 0.6,
    rise_px: 30.0,
};

pub const VIEWPORT_MARGIN_PX: f32 = -100.0;

/// True when the vertical span `[top, bottom)` overlaps the viewport grown
/// by `margin` on both edges. A negative margin shrinks the viewport.
pub fn intersects_viewport(top: f32, bottom: f32, viewport_height: f32, margin: f32) -> bool {
    if bottom <= top {
        return false;
    }
    top < viewport_height + margin && bottom > -margin
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true exactly once, on the first visible observation.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_offsets_each_child() {
        assert!((STAGGER_GRID.child_delay(0) - 0.2).abs() < 1e-6);
        assert!((STAGGER_GRID.child_delay(3) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn negative_margin_delays_visibility() {
        assert!(intersects_viewport(700.0, 900.0, 800.0, 0.0));
        assert!(!intersects_viewport(750.0, 900.0, 800.0, VIEWPORT_MARGIN_PX));
        assert!(!intersects_viewport(-300.0, 50.0, 800.0, VIEWPORT_MARGIN_PX));
    }

    #[test]
    fn latch_never_hides_again() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.revealed());
    }
}
