use approx::assert_relative_eq;

use refview_core::config::ViewerConfig;
use refview_core::events::{InteractionMode, Modifiers, Notification, PointerEvent, WheelEvent};
use refview_core::geometry::{Size, Vec2};
use refview_core::viewport::ViewportController;

mod common;
use common::{controller_with_image, gradient_raster};

const NO_MODS: Modifiers = Modifiers {
    pick: false,
    zoom: false,
};
const PICK: Modifiers = Modifiers {
    pick: true,
    zoom: false,
};
const ZOOM: Modifiers = Modifiers {
    pick: false,
    zoom: true,
};

fn pointer(x: f32, y: f32, modifiers: Modifiers) -> PointerEvent {
    PointerEvent {
        pos: Vec2::new(x, y),
        modifiers,
    }
}

#[test]
fn fit_wide_image_letterboxes_vertically() {
    // 1000x500 image into a 500x500 viewport: limiting dimension is width.
    let c = controller_with_image(500.0, 500.0, 1000, 500);

    assert_relative_eq!(c.initial_zoom(), 0.5);
    assert_relative_eq!(c.zoom(), 0.5);
    assert_relative_eq!(c.minimum_zoom(), 0.125);
    // Scaled image is 500x250, centered: 125px margins top and bottom.
    assert_relative_eq!(c.origin().x, 0.0);
    assert_relative_eq!(c.origin().y, 125.0);
}

#[test]
fn reset_view_is_idempotent() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let (zoom, initial, origin) = (c.zoom(), c.initial_zoom(), c.origin());

    c.reset_view();

    assert_eq!(c.zoom(), zoom);
    assert_eq!(c.initial_zoom(), initial);
    assert_eq!(c.origin(), origin);
}

#[test]
fn reset_view_without_image_only_repaints() {
    let mut c = ViewportController::new(ViewerConfig::default());
    c.resized(Size::new(300.0, 300.0));

    let notes = c.reset_view();

    assert_eq!(notes, vec![Notification::Repaint]);
    assert_eq!(c.zoom(), 1.0);
    assert_eq!(c.origin(), Vec2::ZERO);
}

#[test]
fn set_image_emits_image_changed_then_slider_reset() {
    let mut c = ViewportController::new(ViewerConfig::default());
    c.resized(Size::new(500.0, 500.0));

    let notes = c.set_image(Some(gradient_raster(1000, 500)));
    assert_eq!(notes[0], Notification::ImageChanged(true));
    assert!(notes.contains(&Notification::SliderReset(1.0)));
    assert!(notes.contains(&Notification::Repaint));

    let notes = c.set_image(None);
    assert_eq!(notes[0], Notification::ImageChanged(false));
    assert!(!c.has_image());
}

#[test]
fn plain_drag_pans_by_pointer_displacement() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let origin_before = c.origin();

    c.pointer_pressed(pointer(100.0, 100.0, NO_MODS));
    c.pointer_moved(pointer(150.0, 100.0, NO_MODS));

    assert_relative_eq!(c.origin().x, origin_before.x + 50.0);
    assert_relative_eq!(c.origin().y, origin_before.y);
    // Pan is rigid: zoom untouched.
    assert_eq!(c.zoom(), 0.5);
}

#[test]
fn pan_is_anchored_at_press_not_accumulated() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let origin_before = c.origin();

    c.pointer_pressed(pointer(100.0, 100.0, NO_MODS));
    c.pointer_moved(pointer(180.0, 140.0, NO_MODS));
    c.pointer_moved(pointer(130.0, 110.0, NO_MODS));

    // Net displacement since press is (+30, +10), regardless of the path.
    assert_relative_eq!(c.origin().x, origin_before.x + 30.0);
    assert_relative_eq!(c.origin().y, origin_before.y + 10.0);
}

#[test]
fn drag_zoom_keeps_press_point_fixed() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let press = Vec2::new(200.0, 150.0);
    let image_point = c.viewport_to_image(press);

    c.pointer_pressed(pointer(press.x, press.y, NO_MODS));
    // Dragging up by 50px scales zoom by 1.5 relative to the anchor.
    let notes = c.pointer_moved(pointer(200.0, 100.0, ZOOM));

    assert_relative_eq!(c.zoom(), 0.5 * 1.5);
    let after = c.viewport_to_image(press);
    assert_relative_eq!(after.x, image_point.x, epsilon = 1e-3);
    assert_relative_eq!(after.y, image_point.y, epsilon = 1e-3);
    assert!(matches!(notes[0], Notification::SliderReset(_)));
}

#[test]
fn drag_zoom_is_computed_against_the_anchor_zoom() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    c.pointer_pressed(pointer(200.0, 150.0, NO_MODS));
    c.pointer_moved(pointer(200.0, 100.0, ZOOM));
    c.pointer_moved(pointer(200.0, 50.0, ZOOM));

    // 100px total: anchor.zoom * (1 + 100/100), not compounded per move.
    assert_relative_eq!(c.zoom(), 1.0);
}

#[test]
fn drag_zoom_never_drops_below_minimum_zoom() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    c.pointer_pressed(pointer(200.0, 150.0, NO_MODS));
    // Dragging down 400px asks for a negative zoom; the floor holds.
    c.pointer_moved(pointer(200.0, 550.0, ZOOM));

    assert_eq!(c.zoom(), c.minimum_zoom());
}

#[test]
fn wheel_with_full_step_doubles_zoom() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    c.change_zoom(1.0, true, false);
    assert_eq!(c.zoom(), 1.0);

    c.wheel(WheelEvent {
        pos: Vec2::new(250.0, 250.0),
        delta_y: 500.0,
    });

    assert_relative_eq!(c.zoom(), 2.0);
}

#[test]
fn wheel_keeps_cursor_point_fixed() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let cursor = Vec2::new(120.0, 190.0);
    let image_point = c.viewport_to_image(cursor);

    c.wheel(WheelEvent {
        pos: cursor,
        delta_y: 240.0,
    });

    let after = c.viewport_to_image(cursor);
    assert_relative_eq!(after.x, image_point.x, epsilon = 1e-3);
    assert_relative_eq!(after.y, image_point.y, epsilon = 1e-3);
}

#[test]
fn repeated_wheel_out_stops_at_minimum_zoom() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    for _ in 0..10 {
        c.wheel(WheelEvent {
            pos: Vec2::new(250.0, 250.0),
            delta_y: -400.0,
        });
        assert!(c.zoom() >= c.minimum_zoom());
    }
    assert_eq!(c.zoom(), c.minimum_zoom());
}

#[test]
fn preset_200_is_exact_and_center_fixed() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let center = Vec2::new(250.0, 250.0);
    let image_point = c.viewport_to_image(center);

    let notes = c.change_zoom(2.0, true, true);

    assert_eq!(c.zoom(), 2.0);
    let after = c.viewport_to_image(center);
    assert_relative_eq!(after.x, image_point.x, epsilon = 1e-3);
    assert_relative_eq!(after.y, image_point.y, epsilon = 1e-3);
    assert!(matches!(notes[0], Notification::SliderReset(_)));
}

#[test]
fn absolute_zoom_floors_at_quarter_even_below_minimum_zoom() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    c.change_zoom(0.01, true, false);

    // minimum_zoom is 0.125 here; the absolute floor is the fixed 0.25.
    assert_eq!(c.zoom(), 0.25);
}

#[test]
fn absolute_zoom_may_undercut_a_high_minimum_zoom() {
    // Small image in a large viewport: fit zoom 5.0, gesture floor 1.25.
    let mut c = controller_with_image(500.0, 500.0, 100, 100);
    assert_relative_eq!(c.minimum_zoom(), 1.25);

    c.change_zoom(0.5, true, false);

    // Presets stay reachable below the gesture floor.
    assert_eq!(c.zoom(), 0.5);
}

#[test]
fn relative_zoom_is_clamped_by_minimum_zoom() {
    let mut c = controller_with_image(500.0, 500.0, 100, 100);

    c.change_zoom(0.1, false, false);

    // initial_zoom * 0.1 = 0.5 is below the 1.25 gesture floor.
    assert_eq!(c.zoom(), c.minimum_zoom());
}

#[test]
fn relative_zoom_is_scaled_by_the_fit_zoom() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    let notes = c.change_zoom(2.0, false, true);

    assert_relative_eq!(c.zoom(), 1.0);
    assert!(notes.contains(&Notification::SliderReset(2.0)));
}

#[test]
fn picking_samples_the_pixel_under_the_cursor() {
    // zoom 0.5, origin (0, 125): viewport (12, 137) -> image (24, 24).
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    c.pointer_pressed(pointer(10.0, 135.0, NO_MODS));
    c.pointer_moved(pointer(12.0, 137.0, PICK));

    let sample = c.picked().expect("pick marker set");
    assert_eq!(sample.position, Vec2::new(12.0, 137.0));
    let color = sample.color.expect("inside image bounds");
    assert_eq!((color.r, color.g), (24, 24));
    // Picking never moves the view.
    assert_eq!(c.origin(), Vec2::new(0.0, 125.0));
    assert_eq!(c.zoom(), 0.5);
}

#[test]
fn picking_over_the_letterbox_margin_yields_no_color() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    c.pointer_pressed(pointer(10.0, 50.0, NO_MODS));
    c.pointer_moved(pointer(10.0, 50.0, PICK));

    let sample = c.picked().expect("marker set even off-image");
    assert_eq!(sample.color, None);
}

#[test]
fn press_with_pick_modifier_commits_immediately() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    let notes = c.pointer_pressed(pointer(12.0, 137.0, PICK));

    let picked = notes.iter().find_map(|n| match n {
        Notification::ColorPicked(color) => Some(*color),
        _ => None,
    });
    let color = picked.expect("color committed on press");
    assert_eq!((color.r, color.g), (24, 24));
}

#[test]
fn press_with_pick_modifier_over_margin_commits_nothing() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    let notes = c.pointer_pressed(pointer(10.0, 50.0, PICK));

    assert!(!notes
        .iter()
        .any(|n| matches!(n, Notification::ColorPicked(_))));
}

#[test]
fn release_ends_the_drag_and_clears_the_pick_marker() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let origin = c.origin();

    c.pointer_pressed(pointer(12.0, 137.0, PICK));
    assert!(!c.is_moving());
    c.pointer_moved(pointer(20.0, 140.0, PICK));
    assert!(c.is_moving());
    c.pointer_released(pointer(20.0, 140.0, PICK));

    assert!(!c.is_dragging());
    assert!(!c.is_moving());
    assert!(c.picked().is_none());
    // Release never alters the transform.
    assert_eq!(c.origin(), origin);
    assert_eq!(c.zoom(), 0.5);
}

#[test]
fn dropping_the_pick_modifier_mid_drag_resumes_panning() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let origin = c.origin();

    c.pointer_pressed(pointer(100.0, 200.0, NO_MODS));
    c.pointer_moved(pointer(110.0, 210.0, PICK));
    assert!(c.picked().is_some());

    c.pointer_moved(pointer(130.0, 220.0, NO_MODS));

    assert!(c.picked().is_none());
    // Pan applies relative to the press anchor, not the last pick position.
    assert_relative_eq!(c.origin().x, origin.x + 30.0);
    assert_relative_eq!(c.origin().y, origin.y + 20.0);
}

#[test]
fn move_without_a_press_does_nothing() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    let origin = c.origin();

    let notes = c.pointer_moved(pointer(300.0, 300.0, NO_MODS));

    assert!(notes.is_empty());
    assert_eq!(c.origin(), origin);
}

#[test]
fn interaction_mode_is_derived_from_drag_state_and_modifiers() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);

    assert_eq!(c.interaction_mode(PICK), InteractionMode::Idle);

    c.pointer_pressed(pointer(100.0, 100.0, NO_MODS));
    assert_eq!(c.interaction_mode(NO_MODS), InteractionMode::Panning);
    assert_eq!(c.interaction_mode(ZOOM), InteractionMode::Zooming);
    assert_eq!(c.interaction_mode(PICK), InteractionMode::Picking);
    // Pick wins over zoom when both are held.
    let both = Modifiers {
        pick: true,
        zoom: true,
    };
    assert_eq!(c.interaction_mode(both), InteractionMode::Picking);

    c.pointer_released(pointer(100.0, 100.0, NO_MODS));
    assert_eq!(c.interaction_mode(NO_MODS), InteractionMode::Idle);
}

#[test]
fn resize_refits_and_recenters() {
    let mut c = controller_with_image(500.0, 500.0, 1000, 500);
    c.change_zoom(4.0, true, false);

    let notes = c.resized(Size::new(1000.0, 500.0));

    // 1000x500 viewport fits the 1000x500 image exactly at zoom 1.
    assert_relative_eq!(c.initial_zoom(), 1.0);
    assert_eq!(c.zoom(), 1.0);
    assert_eq!(c.origin(), Vec2::ZERO);
    assert!(notes.contains(&Notification::SliderReset(1.0)));
}
