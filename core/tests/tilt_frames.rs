use std::collections::HashMap;

use portfolio_core::{PointerTilt, TileId, TileRect, TiltHover};

fn grid() -> (PointerTilt, HashMap<TileId, TileRect>) {
    let tiles = vec![TileId(0), TileId(1), TileId(2)];
    let mut rects = HashMap::new();
    for (index, id) in tiles.iter().enumerate() {
        rects.insert(
            *id,
            TileRect {
                left: index as f32 * 120.0,
                top: 0.0,
                width: 100.0,
                height: 80.0,
            },
        );
    }
    (PointerTilt::new(tiles), rects)
}

fn move_and_commit(tilt: &mut PointerTilt, x: f32, y: f32) {
    tilt.on_pointer_move(x, y);
    tilt.on_animation_frame();
}

#[test]
fn unhovered_tiles_report_zero_for_any_pointer() {
    let (mut tilt, rects) = grid();
    tilt.on_tile_hover_start(TileId(1)).unwrap();
    for x in [-50.0, 0.0, 37.0, 170.0, 400.0] {
        for y in [-20.0, 0.0, 40.0, 95.0] {
            move_and_commit(&mut tilt, x, y);
            assert!(tilt.compute_tilt(TileId(0), &rects).is_zero());
            assert!(tilt.compute_tilt(TileId(2), &rects).is_zero());
        }
    }
}

#[test]
fn sign_flips_across_center_on_each_axis() {
    let (mut tilt, rects) = grid();
    tilt.on_tile_hover_start(TileId(0)).unwrap();

    move_and_commit(&mut tilt, 50.0, 40.0);
    assert!(tilt.compute_tilt(TileId(0), &rects).is_zero());

    move_and_commit(&mut tilt, 30.0, 40.0);
    let left = tilt.compute_tilt(TileId(0), &rects);
    move_and_commit(&mut tilt, 70.0, 40.0);
    let right = tilt.compute_tilt(TileId(0), &rects);
    assert!(left.rotate_y_deg < 0.0 && right.rotate_y_deg > 0.0);
    assert!((left.rotate_y_deg + right.rotate_y_deg).abs() < 1e-4);
    assert_eq!(left.rotate_x_deg, 0.0);

    move_and_commit(&mut tilt, 50.0, 20.0);
    let above = tilt.compute_tilt(TileId(0), &rects);
    move_and_commit(&mut tilt, 50.0, 60.0);
    let below = tilt.compute_tilt(TileId(0), &rects);
    assert!(above.rotate_x_deg < 0.0 && below.rotate_x_deg > 0.0);
    assert!((above.rotate_x_deg + below.rotate_x_deg).abs() < 1e-4);
}

#[test]
fn response_is_monotonic_along_an_axis() {
    let (mut tilt, rects) = grid();
    tilt.on_tile_hover_start(TileId(0)).unwrap();
    let mut last = f32::NEG_INFINITY;
    for step in 0..=10 {
        move_and_commit(&mut tilt, step as f32 * 10.0, 40.0);
        let value = tilt.compute_tilt(TileId(0), &rects).rotate_y_deg;
        assert!(value > last);
        last = value;
    }
}

#[test]
fn newest_sample_in_a_frame_wins() {
    let (mut tilt, rects) = grid();
    tilt.on_tile_hover_start(TileId(0)).unwrap();
    assert!(tilt.on_pointer_move(0.0, 0.0));
    assert!(!tilt.on_pointer_move(10.0, 10.0));
    assert!(!tilt.on_pointer_move(90.0, 70.0));
    assert_eq!(tilt.pointer(), None);
    assert!(tilt.compute_tilt(TileId(0), &rects).is_zero());

    assert!(tilt.on_animation_frame());
    assert_eq!(tilt.pointer(), Some((90.0, 70.0)));
    assert!(!tilt.on_animation_frame());
    assert!(tilt.on_pointer_move(1.0, 1.0));
}

#[test]
fn leaving_the_container_resets_everything() {
    let (mut tilt, rects) = grid();
    tilt.on_tile_hover_start(TileId(2)).unwrap();
    move_and_commit(&mut tilt, 250.0, 10.0);
    assert!(!tilt.compute_tilt(TileId(2), &rects).is_zero());
    tilt.on_pointer_move(260.0, 12.0);
    tilt.on_pointer_leave();
    assert_eq!(tilt.hover(), TiltHover::NoHover);
    assert_eq!(tilt.pointer(), None);
    assert!(!tilt.on_animation_frame());
    assert!(tilt.compute_tilt(TileId(2), &rects).is_zero());
}
