// Host-side tests for pointer tracking and the cursor glow.
// The main crate is wasm-only, so we compile the platform-free widgets directly.

#![allow(dead_code)]
#[path = "../src/widgets/mod.rs"]
mod widgets;

use glam::Vec2;
use widgets::glow::*;
use widgets::pointer::*;

#[test]
fn pointer_rests_near_top_center() {
    let p = PointerState::default();
    assert_eq!(p.uv, Vec2::new(0.5, 0.4));
    assert!(!p.active);
}

#[test]
fn move_normalizes_and_activates() {
    let mut p = PointerState::default();
    p.on_move(200.0, 100.0, 400.0, 400.0);
    assert_eq!(p.uv, Vec2::new(0.5, 0.25));
    assert!(p.active);
    assert_eq!(p.to_px(1000.0, 800.0), Vec2::new(500.0, 200.0));
}

#[test]
fn move_outside_viewport_is_clamped() {
    let mut p = PointerState::default();
    p.on_move(-50.0, 900.0, 800.0, 600.0);
    assert_eq!(p.uv, Vec2::new(0.0, 1.0));
}

#[test]
fn zero_viewport_keeps_previous_position() {
    let mut p = PointerState::default();
    p.on_move(10.0, 10.0, 0.0, 600.0);
    assert_eq!(p.uv, Vec2::new(0.5, 0.4));
    assert!(p.active);
    assert_eq!(normalize(1.0, 1.0, 100.0, f64::NAN), None);
}

#[test]
fn leave_deactivates_but_keeps_position() {
    let mut p = PointerState::default();
    p.on_move(300.0, 150.0, 600.0, 600.0);
    p.on_leave();
    assert!(!p.active);
    assert_eq!(p.uv, Vec2::new(0.5, 0.25));
}

#[test]
fn glow_gradient_is_centered_on_percentages() {
    assert_eq!(
        glow_background(50.0, 25.0),
        "radial-gradient(200px circle at 50% 25%, #ffd24d22, #b45aff11 40%, transparent 70%)"
    );
}

#[test]
fn glow_follows_pointer_state() {
    let mut p = PointerState::default();
    p.on_move(0.0, 300.0, 400.0, 400.0);
    assert_eq!(glow_for_pointer(&p), glow_background(0.0, 75.0));
    assert!(glow_for_pointer(&p).contains("at 0% 75%"));
}
