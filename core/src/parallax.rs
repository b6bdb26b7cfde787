use crate::frame::FrameGate;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub depth: f32,
    pub max_travel: f32,
}

pub const HERO_LAYERS: [ParallaxLayer; 3] = [
    ParallaxLayer {
        depth: 0.15,
        max_travel: 120.0,
    },
    ParallaxLayer {
        depth: 0.3,
        max_travel: 200.0,
    },
    ParallaxLayer {
        depth: 0.45,
        max_travel: 260.0,
    },
];

pub fn parallax_offset(scroll_y: f32, layer: ParallaxLayer) -> f32 {
    let travel = layer.max_travel.abs();
    (-scroll_y * layer.depth).clamp(-travel, travel)
}

#[derive(Clone, Debug, Default)]
pub struct ParallaxTracker {
    scroll_y: f32,
    samples: FrameGate<f32>,
}

impl ParallaxTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        self.samples.offer(scroll_y.max(0.0))
    }

    pub fn on_animation_frame(&mut self) -> bool {
        let Some(sample) = self.samples.take() else {
            return false;
        };
        let changed = sample != self.scroll_y;
        self.scroll_y = sample;
        changed
    }

    pub fn offset(&self, layer: ParallaxLayer) -> f32 {
        parallax_offset(self.scroll_y, layer)
    }

    pub fn offsets(&self, layers: &[ParallaxLayer]) -> Vec<f32> {
        layers.iter().map(|layer| self.offset(*layer)).collect()
    }

    pub fn reset(&mut self) {
        self.samples.cancel();
        self.scroll_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deeper_layers_move_further_until_clamped() {
        let shallow = parallax_offset(100.0, HERO_LAYERS[0]);
        let deep = parallax_offset(100.0, HERO_LAYERS[2]);
        assert!(deep < shallow && shallow < 0.0);
        let clamped = parallax_offset(10_000.0, HERO_LAYERS[0]);
        assert_eq!(clamped, -HERO_LAYERS[0].max_travel);
    }

    #[test]
    fn tracker_commits_latest_scroll_per_frame() {
        let mut tracker = ParallaxTracker::new();
        assert!(tracker.on_scroll(10.0));
        assert!(!tracker.on_scroll(40.0));
        assert!(tracker.on_animation_frame());
        assert_eq!(tracker.scroll_y(), 40.0);
        assert!(!tracker.on_animation_frame());
    }

    #[test]
    fn negative_scroll_is_treated_as_top() {
        let mut tracker = ParallaxTracker::new();
        tracker.on_scroll(-30.0);
        tracker.on_animation_frame();
        assert_eq!(tracker.scroll_y(), 0.0);
        assert_eq!(tracker.offset(HERO_LAYERS[1]), 0.0);
    }
}
