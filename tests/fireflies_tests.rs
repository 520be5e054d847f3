// Host-side tests for the firefly field.
// The main crate is wasm-only, so we compile the platform-free widgets directly.

#![allow(dead_code)]
#[path = "../src/widgets/mod.rs"]
mod widgets;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use widgets::constants::*;
use widgets::fireflies::*;
use widgets::pointer::PointerState;

fn field(seed: u64) -> FireflyField {
    FireflyField::new(FieldParams::default(), StdRng::seed_from_u64(seed))
}

fn expected_count(w: f64, h: f64) -> usize {
    (28.0 * w * h / (1100.0 * 700.0)).floor() as usize
}

#[derive(Debug, PartialEq)]
enum Call {
    Clear(Vec2),
    Blend(Blend),
    Fog(Fog),
    Sprite(Sprite),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl FieldCanvas for Recorder {
    fn clear(&mut self, size: Vec2) {
        self.calls.push(Call::Clear(size));
    }
    fn set_blend(&mut self, blend: Blend) {
        self.calls.push(Call::Blend(blend));
    }
    fn fill_fog(&mut self, fog: &Fog) {
        self.calls.push(Call::Fog(*fog));
    }
    fn fill_sprite(&mut self, sprite: &Sprite) {
        self.calls.push(Call::Sprite(*sprite));
    }
}

#[test]
fn resize_matches_density_target() {
    for (w, h) in [
        (1100.0, 700.0),
        (1920.0, 1080.0),
        (375.0, 812.0),
        (2560.0, 1440.0),
        (100.0, 100.0),
        (0.0, 0.0),
    ] {
        let mut f = field(1);
        f.resize(Viewport::new(w, h, 1.0));
        assert_eq!(f.len(), expected_count(w, h), "viewport {w}x{h}");
    }
    assert_eq!(expected_count(1100.0, 700.0), 28);
}

#[test]
fn resize_records_the_applied_viewport() {
    let mut f = field(4);
    assert_eq!(*f.viewport(), Viewport::default());
    f.resize(Viewport::new(1280.0, 800.0, 3.0));
    assert_eq!(f.viewport().width, 1280.0);
    assert_eq!(f.viewport().height, 800.0);
    assert_eq!(f.viewport().dpr, 2.0);
}

#[test]
fn repeated_resize_keeps_existing_flies() {
    let mut f = field(2);
    let vp = Viewport::new(1280.0, 800.0, 2.0);
    f.resize(vp);
    let before = f.flies().to_vec();
    for _ in 0..5 {
        f.resize(vp);
    }
    assert_eq!(f.flies(), &before[..]);
}

#[test]
fn shrinking_drops_from_the_end_and_growing_appends() {
    let mut f = field(3);
    f.resize(Viewport::new(1920.0, 1080.0, 1.0));
    let big = f.flies().to_vec();

    f.resize(Viewport::new(800.0, 600.0, 1.0));
    assert_eq!(f.len(), expected_count(800.0, 600.0));
    assert_eq!(f.flies(), &big[..f.len()]);

    let small = f.flies().to_vec();
    f.resize(Viewport::new(1920.0, 1080.0, 1.0));
    assert_eq!(f.len(), big.len());
    assert_eq!(&f.flies()[..small.len()], &small[..]);
}

#[test]
fn spawned_attributes_stay_in_configured_ranges() {
    let mut f = field(4);
    let (w, h) = (1600.0, 900.0);
    f.resize(Viewport::new(w, h, 1.0));
    assert!(!f.is_empty());
    for fly in f.flies() {
        assert!(fly.pos.x >= 0.0 && fly.pos.x <= w as f32);
        assert!(fly.pos.y >= 0.0 && fly.pos.y <= h as f32);
        assert!(fly.r >= RADIUS_RANGE.0 && fly.r < RADIUS_RANGE.1);
        assert!(fly.a >= ALPHA_RANGE.0 && fly.a < ALPHA_RANGE.1);
        assert!(fly.phase >= 0.0 && fly.phase < std::f32::consts::TAU);
        assert!(fly.speed >= SPEED_RANGE.0 && fly.speed < SPEED_RANGE.1);
        assert!(fly.drift >= DRIFT_RANGE.0 && fly.drift < DRIFT_RANGE.1);
        assert!(fly.hue_shift.abs() <= HUE_SHIFT_MAX);
    }
}

#[test]
fn viewport_clamps_pixel_ratio_and_sizes_backing_buffer() {
    let vp = Viewport::new(800.0, 600.0, 3.0);
    assert_eq!(vp.dpr, 2.0);
    assert_eq!(vp.backing_size(), (1600, 1200));

    let vp = Viewport::new(801.5, 600.0, 0.5);
    assert_eq!(vp.dpr, 1.0);
    assert_eq!(vp.backing_size(), (801, 600));

    let vp = Viewport::new(640.0, 480.0, f64::NAN);
    assert_eq!(vp.dpr, 1.0);

    let vp = Viewport::new(-5.0, f64::INFINITY, 1.5);
    assert_eq!((vp.width, vp.height), (0.0, 0.0));
    assert_eq!(vp.backing_size(), (0, 0));
}

#[test]
fn flies_never_leave_the_wrap_margin() {
    let (w, h) = (1024.0_f64, 768.0_f64);
    let mut f = field(5);
    f.resize(Viewport::new(w, h, 1.0));

    let corners = [
        PointerState::default(),
        PointerState {
            uv: Vec2::new(0.0, 0.0),
            active: true,
        },
        PointerState {
            uv: Vec2::new(1.0, 1.0),
            active: true,
        },
    ];
    let mut t = 0.0;
    for pointer in corners {
        for _ in 0..2000 {
            t += 16.7;
            f.step(t, &pointer);
            for fly in f.flies() {
                assert!(fly.pos.x >= -WRAP_MARGIN && fly.pos.x <= w as f32 + WRAP_MARGIN);
                assert!(fly.pos.y >= -WRAP_MARGIN && fly.pos.y <= h as f32 + WRAP_MARGIN);
            }
        }
    }
}

#[test]
fn flies_wrap_instead_of_bouncing() {
    // A tiny viewport with a fast clock forces flies across the margin.
    let mut f = FireflyField::new(
        FieldParams {
            density: 40_000.0,
            ..FieldParams::default()
        },
        StdRng::seed_from_u64(6),
    );
    f.resize(Viewport::new(30.0, 30.0, 1.0));
    assert!(!f.is_empty());
    let mut seen_far_side = false;
    for i in 0..20_000 {
        f.step(i as f64 * 40.0, &PointerState::default());
        seen_far_side |= f.flies().iter().any(|fly| {
            [fly.pos.x, fly.pos.y]
                .iter()
                .any(|&v| v == -WRAP_MARGIN || v == 30.0 + WRAP_MARGIN)
        });
    }
    assert!(seen_far_side, "expected at least one fly to wrap");
}

#[test]
fn active_pointer_pulls_gently() {
    let vp = Viewport::new(1200.0, 800.0, 1.0);
    let mut idle = field(7);
    let mut pulled = field(7);
    idle.resize(vp);
    pulled.resize(vp);

    let pointer = PointerState {
        uv: Vec2::new(0.25, 0.75),
        active: true,
    };
    let target = pointer.to_px(1200.0, 800.0);
    idle.step(1000.0, &PointerState::default());
    pulled.step(1000.0, &pointer);

    let max_step = PULL_CAP * PULL_DAMPING + 1e-4;
    for (a, b) in idle.flies().iter().zip(pulled.flies()) {
        let nudge = b.pos - a.pos;
        assert!(nudge.length() <= max_step, "nudge {nudge:?} too large");
        assert!(nudge.dot(target - a.pos) >= 0.0, "nudge points away from pointer");
    }
}

#[test]
fn inactive_pointer_has_no_pull() {
    let vp = Viewport::new(900.0, 600.0, 1.0);
    let mut a = field(8);
    let mut b = field(8);
    a.resize(vp);
    b.resize(vp);
    let parked = PointerState {
        uv: Vec2::new(0.9, 0.1),
        active: false,
    };
    a.step(500.0, &PointerState::default());
    b.step(500.0, &parked);
    assert_eq!(a.flies(), b.flies());
}

#[test]
fn sprite_alpha_stays_within_cap() {
    for params in [FieldParams::default(), FieldParams::calm()] {
        let cap = params.alpha_cap;
        let mut f = FireflyField::new(params, StdRng::seed_from_u64(9));
        f.resize(Viewport::new(1440.0, 900.0, 1.0));
        for i in 0..500 {
            let t = i as f64 * 33.0;
            for s in f.sprites(t) {
                assert!(s.alpha >= 0.0 && s.alpha <= cap, "alpha {} cap {}", s.alpha, cap);
            }
        }
    }
}

#[test]
fn sprite_radius_and_hue_follow_the_fly() {
    let mut f = field(10);
    f.resize(Viewport::new(1100.0, 700.0, 1.0));
    for fly in f.flies() {
        let s = fly.sprite(1234.0, ALPHA_CAP);
        let lo = fly.r * TWINKLE_RADIUS_BASE * SPRITE_SCALE - 1e-4;
        let hi = fly.r * (TWINKLE_RADIUS_BASE + TWINKLE_RADIUS_SPAN) * SPRITE_SCALE + 1e-4;
        assert!(s.radius >= lo && s.radius <= hi);
        assert_eq!(s.hue, BASE_HUE + fly.hue_shift);
        assert_eq!(s.center, fly.pos);
    }
}

#[test]
fn sprite_stops_fade_to_transparent() {
    let s = Sprite {
        center: Vec2::ZERO,
        radius: 12.0,
        hue: 50,
        alpha: 0.2,
    };
    let stops = s.stops();
    assert_eq!(stops[0].0, 0.0);
    assert_eq!(stops[0].1.to_string(), "hsla(50, 95%, 65%, 0.2)");
    assert_eq!(stops[1].0, SPRITE_MID_STOP);
    assert!((stops[1].1.alpha - 0.08).abs() < 1e-6);
    assert_eq!(stops[2].1.to_string(), "hsla(50, 95%, 60%, 0)");
}

#[test]
fn fog_sits_above_center_and_covers_viewport() {
    let fog = Fog::for_viewport(Vec2::new(1000.0, 600.0));
    assert!((fog.center - Vec2::new(500.0, 210.0)).length() < 1e-3);
    assert_eq!(fog.inner_radius, FOG_INNER_RADIUS);
    assert_eq!(fog.outer_radius, 1000.0);
    assert_eq!(fog.stops().len(), 3);
    assert_eq!(fog.stops()[2].1, "rgba(7, 9, 24, 0)");
}

#[test]
fn frame_draws_fog_then_additive_sprites() {
    let mut f = field(11);
    f.resize(Viewport::new(800.0, 600.0, 1.0));
    let n = f.len();
    let mut canvas = Recorder::default();

    let tick = f.frame(16.0, &PointerState::default(), &mut canvas);
    assert_eq!(tick, Tick::Continue);
    assert_eq!(canvas.calls.len(), 4 + n);
    assert_eq!(canvas.calls[0], Call::Clear(Vec2::new(800.0, 600.0)));
    assert_eq!(canvas.calls[1], Call::Blend(Blend::Normal));
    assert!(matches!(canvas.calls[2], Call::Fog(_)));
    assert_eq!(canvas.calls[3], Call::Blend(Blend::Additive));
    assert!(canvas.calls[4..].iter().all(|c| matches!(c, Call::Sprite(_))));
}

#[test]
fn blend_modes_map_to_composite_operations() {
    assert_eq!(Blend::Normal.composite_op(), "source-over");
    assert_eq!(Blend::Additive.composite_op(), "lighter");
}

#[test]
fn empty_viewport_frame_only_paints_backdrop() {
    let mut f = field(12);
    let mut canvas = Recorder::default();
    assert_eq!(f.frame(0.0, &PointerState::default(), &mut canvas), Tick::Continue);
    assert_eq!(canvas.calls.len(), 4);
}
