use super::*;

use uuid::Uuid;

const SURFACE: Size = Size { width: 300.0, height: 450.0 };
const STICKER: Size = Size { width: 50.0, height: 50.0 };

fn id() -> StickerId {
    Uuid::new_v4()
}

// =============================================================
// clamp_position
// =============================================================

#[test]
fn clamp_keeps_interior_position() {
    let pos = clamp_position(Point::new(100.0, 200.0), SURFACE, STICKER);
    assert_eq!(pos, Point::new(100.0, 200.0));
}

#[test]
fn clamp_pins_negative_travel_to_origin() {
    let pos = clamp_position(Point::new(-500.0, -0.1), SURFACE, STICKER);
    assert_eq!(pos, Point::new(0.0, 0.0));
}

#[test]
fn clamp_pins_overshoot_to_far_edges() {
    let pos = clamp_position(Point::new(10_000.0, 10_000.0), SURFACE, STICKER);
    assert_eq!(pos, Point::new(250.0, 400.0));
}

#[test]
fn clamp_lower_bound_wins_when_sticker_larger_than_surface() {
    let big = Size::new(400.0, 500.0);
    let pos = clamp_position(Point::new(50.0, 50.0), SURFACE, big);
    assert_eq!(pos, Point::new(0.0, 0.0));
}

#[test]
fn clamp_holds_for_arbitrary_pointer_travel() {
    // Sweep a grid of wild pointer positions; the invariant must hold for
    // every one of them.
    let mut x = -1000.0;
    while x <= 1000.0 {
        let mut y = -1000.0;
        while y <= 1000.0 {
            let pos = clamp_position(Point::new(x, y), SURFACE, STICKER);
            assert!(pos.x >= 0.0 && pos.x <= SURFACE.width - STICKER.width);
            assert!(pos.y >= 0.0 && pos.y <= SURFACE.height - STICKER.height);
            y += 137.0;
        }
        x += 137.0;
    }
}

// =============================================================
// centered_position
// =============================================================

#[test]
fn centered_position_centers_sticker() {
    let pos = centered_position(SURFACE, STICKER);
    assert_eq!(pos, Point::new(125.0, 200.0));
}

// =============================================================
// scaled_font
// =============================================================

#[test]
fn scaled_font_combines_diagonal_travel() {
    // (30 + 20) * 0.2 = 10 added to the starting size.
    let size = scaled_font(40.0, Point::new(0.0, 0.0), Point::new(30.0, 20.0));
    assert!((size - 50.0).abs() < 1e-9);
}

#[test]
fn scaled_font_shrinks_on_up_left_travel() {
    let size = scaled_font(40.0, Point::new(100.0, 100.0), Point::new(80.0, 70.0));
    assert!((size - 30.0).abs() < 1e-9);
}

#[test]
fn scaled_font_clamps_to_max() {
    let size = scaled_font(40.0, Point::new(0.0, 0.0), Point::new(5000.0, 5000.0));
    assert_eq!(size, 70.0);
}

#[test]
fn scaled_font_clamps_to_min() {
    let size = scaled_font(40.0, Point::new(0.0, 0.0), Point::new(-5000.0, -5000.0));
    assert_eq!(size, 20.0);
}

#[test]
fn scaled_font_stays_in_bounds_for_any_gesture_magnitude() {
    for mag in [-1e6, -333.3, -1.0, 0.0, 1.0, 333.3, 1e6] {
        let size = scaled_font(45.0, Point::new(0.0, 0.0), Point::new(mag, mag));
        assert!((20.0..=70.0).contains(&size), "size {size} out of bounds for {mag}");
    }
}

// =============================================================
// GestureState transitions
// =============================================================

#[test]
fn gesture_default_is_idle() {
    let gesture = GestureState::default();
    assert!(!gesture.is_active());
}

#[test]
fn begin_drag_from_idle_records_grab_offset() {
    let sticker = id();
    let mut gesture = GestureState::default();
    assert!(gesture.begin_drag(sticker, Point::new(110.0, 220.0), Point::new(100.0, 200.0), STICKER));
    assert!(gesture.is_active());

    // Moving the pointer by (5, 5) moves the sticker by exactly (5, 5):
    // the grab offset prevents the jump at drag start.
    let update = gesture.pointer_move(Point::new(115.0, 225.0), SURFACE);
    assert_eq!(
        update,
        Some(GestureUpdate::Moved { sticker, left: 105.0, top: 205.0 })
    );
}

#[test]
fn drag_updates_are_clamped_to_surface() {
    let sticker = id();
    let mut gesture = GestureState::default();
    gesture.begin_drag(sticker, Point::new(0.0, 0.0), Point::new(0.0, 0.0), STICKER);

    let update = gesture.pointer_move(Point::new(-400.0, 9000.0), SURFACE);
    assert_eq!(
        update,
        Some(GestureUpdate::Moved { sticker, left: 0.0, top: 400.0 })
    );
}

#[test]
fn begin_resize_from_idle_tracks_font_scaling() {
    let sticker = id();
    let mut gesture = GestureState::default();
    assert!(gesture.begin_resize(sticker, Point::new(50.0, 50.0), 30.0));

    let update = gesture.pointer_move(Point::new(75.0, 75.0), SURFACE);
    match update {
        Some(GestureUpdate::Sized { sticker: got, font_size }) => {
            assert_eq!(got, sticker);
            assert!((font_size - 40.0).abs() < 1e-9);
        }
        other => panic!("expected Sized update, got {other:?}"),
    }
}

#[test]
fn drag_and_resize_are_mutually_exclusive() {
    let mut gesture = GestureState::default();
    assert!(gesture.begin_drag(id(), Point::new(0.0, 0.0), Point::new(0.0, 0.0), STICKER));
    assert!(!gesture.begin_resize(id(), Point::new(0.0, 0.0), 40.0));
    assert!(!gesture.begin_drag(id(), Point::new(0.0, 0.0), Point::new(0.0, 0.0), STICKER));
}

#[test]
fn finish_returns_gesture_sticker_and_resets_to_idle() {
    let sticker = id();
    let mut gesture = GestureState::default();
    gesture.begin_drag(sticker, Point::new(0.0, 0.0), Point::new(0.0, 0.0), STICKER);
    assert_eq!(gesture.finish(), Some(sticker));
    assert!(!gesture.is_active());
    assert_eq!(gesture.finish(), None);
}

#[test]
fn pointer_move_while_idle_produces_no_update() {
    let gesture = GestureState::default();
    assert_eq!(gesture.pointer_move(Point::new(10.0, 10.0), SURFACE), None);
}

#[test]
fn new_gesture_can_start_after_previous_finishes() {
    let mut gesture = GestureState::default();
    gesture.begin_drag(id(), Point::new(0.0, 0.0), Point::new(0.0, 0.0), STICKER);
    gesture.finish();
    assert!(gesture.begin_resize(id(), Point::new(0.0, 0.0), 40.0));
}
