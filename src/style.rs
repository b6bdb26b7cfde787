use portfolio_core::reveal::RevealSchedule;
use portfolio_core::{LayoutTransform, Tilt};

pub(crate) const TILT_PERSPECTIVE_PX: f32 = 800.0;
pub(crate) const TILE_LIFT_PX: f32 = -5.0;

pub(crate) fn deck_card_style(transform: &LayoutTransform) -> String {
    format!(
        "transform: translate(-50%, -50%) translate({:.1}px, {:.1}px) rotate({:.2}deg); \
         z-index: {}; opacity: {}; width: {:.0}px; height: {:.0}px;",
        transform.x,
        transform.y,
        transform.rotation_deg,
        transform.z_index,
        transform.opacity,
        transform.width,
        transform.height
    )
}

pub(crate) fn tilt_style(tilt: Tilt, hovered: bool) -> String {
    let lift = if hovered { TILE_LIFT_PX } else { 0.0 };
    format!(
        "transform: perspective({:.0}px) translateY({:.0}px) rotateX({:.2}deg) rotateY({:.2}deg);",
        TILT_PERSPECTIVE_PX, lift, tilt.rotate_x_deg, tilt.rotate_y_deg
    )
}

pub(crate) fn reveal_style(schedule: &RevealSchedule, index: usize, revealed: bool) -> String {
    let (opacity, rise) = if revealed {
        (1.0, 0.0)
    } else {
        (0.0, schedule.rise_px)
    };
    format!(
        "opacity: {}; transform: translateY({:.0}px); transition-duration: {:.2}s; transition-delay: {:.2}s;",
        opacity,
        rise,
        schedule.duration_s,
        schedule.child_delay(index)
    )
}

pub(crate) fn parallax_style(offset_y: f32) -> String {
    format!("transform: translate3d(0, {:.1}px, 0);", offset_y)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use portfolio_core::reveal::STAGGER_GRID;
    use portfolio_core::{tilt_for_pointer, CardDeck, ItemId, TileRect};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn expanded_card_style_is_centered_and_on_top() {
        let mut deck = CardDeck::new(vec![ItemId(1), ItemId(2)]);
        deck.on_item_click(ItemId(2)).unwrap();
        let style = deck_card_style(&deck.transform_for(ItemId(2)).unwrap());
        assert!(style.contains("translate(0.0px, 0.0px) rotate(0.00deg)"));
        assert!(style.contains("z-index: 50;"));
        assert!(style.contains("width: 352px; height: 480px;"));
    }

    #[wasm_bindgen_test]
    fn zero_tilt_renders_flat() {
        let style = tilt_style(Tilt::ZERO, false);
        assert!(style.contains("rotateX(0.00deg) rotateY(0.00deg)"));
        assert!(style.contains("translateY(0px)"));
    }

    #[wasm_bindgen_test]
    fn pointer_below_center_renders_positive_rotate_x() {
        let rect = TileRect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let style = tilt_style(tilt_for_pointer(rect, (50.0, 90.0)), true);
        assert!(style.contains("rotateX(8.00deg)"), "{style}");
        assert!(style.contains("rotateY(0.00deg)"), "{style}");
    }

    #[wasm_bindgen_test]
    fn hidden_reveal_sits_below_final_position() {
        let style = reveal_style(&STAGGER_GRID, 2, false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(20px)"));
        assert!(style.contains("transition-delay: 0.40s;"));
    }
}
