//! Ambient firefly field: particle state, per-frame motion and the draw list
//! handed to a [`FieldCanvas`].
//!
//! Coordinates are CSS pixels. The host is responsible for scaling the
//! backing buffer by the device pixel ratio (see [`Viewport::backing_size`]).

use super::constants::*;
use super::pointer::PointerState;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;
use std::fmt;

/// Viewport metrics, recomputed on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Non-finite or negative sizes collapse to zero; the pixel ratio is
    /// clamped to `[DPR_MIN, DPR_MAX]`.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let sane = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(DPR_MIN, DPR_MAX)
        } else {
            DPR_MIN
        };
        Self {
            width: sane(width),
            height: sane(height),
            dpr,
        }
    }

    /// Canvas backing buffer size in device pixels.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Particle-field tunables. `Default` is the reference look; `calm()` caps the
/// twinkle lower.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub density: f64,
    pub reference_area: f64,
    pub wrap_margin: f32,
    pub alpha_cap: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density: FIREFLY_DENSITY,
            reference_area: REFERENCE_WIDTH * REFERENCE_HEIGHT,
            wrap_margin: WRAP_MARGIN,
            alpha_cap: ALPHA_CAP,
        }
    }
}

impl FieldParams {
    pub fn calm() -> Self {
        Self {
            alpha_cap: ALPHA_CAP_CALM,
            ..Self::default()
        }
    }

    /// Density target: `floor(density * w * h / reference_area)`.
    pub fn target_count(&self, viewport: &Viewport) -> usize {
        if self.reference_area <= 0.0 {
            return 0;
        }
        let n = (self.density * viewport.width * viewport.height / self.reference_area).floor();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Firefly {
    pub pos: Vec2,
    pub r: f32,
    pub a: f32,
    pub phase: f32,
    pub speed: f32,
    pub drift: f32,
    pub hue_shift: i16,
}

impl Firefly {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport) -> Self {
        let size = viewport.size();
        Self {
            pos: Vec2::new(rng.gen_range(0.0..=size.x), rng.gen_range(0.0..=size.y)),
            r: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
            a: rng.gen_range(ALPHA_RANGE.0..ALPHA_RANGE.1),
            phase: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1),
            drift: rng.gen_range(DRIFT_RANGE.0..DRIFT_RANGE.1),
            hue_shift: rng.gen_range(-HUE_SHIFT_MAX..=HUE_SHIFT_MAX),
        }
    }

    /// Wobble along two phase-shifted oscillators, then wrap around the
    /// viewport edges.
    fn wander(&mut self, t: f64, size: Vec2, margin: f32) {
        let speed = self.speed as f64;
        let phase = self.phase as f64;
        let wob_x = (t * WOBBLE_X_RATE * speed + phase).sin() as f32;
        let wob_y = (t * WOBBLE_Y_RATE * speed + phase * WOBBLE_Y_PHASE_MUL).cos() as f32;
        self.pos.x += wob_x * self.drift * WOBBLE_X_SCALE;
        self.pos.y += wob_y * self.drift * WOBBLE_Y_SCALE;
        self.pos.x = wrap(self.pos.x, size.x, margin);
        self.pos.y = wrap(self.pos.y, size.y, margin);
    }

    /// Nudge toward the pointer. The step never exceeds `PULL_CAP * PULL_DAMPING`.
    fn attract(&mut self, target: Vec2) {
        let delta = target - self.pos;
        let dist = delta.length() + PULL_DIST_EPSILON;
        let pull = (PULL_NUMERATOR / dist).clamp(0.0, PULL_CAP) * PULL_DAMPING;
        self.pos += delta / dist * pull;
    }

    #[inline]
    fn twinkle(&self, t: f64) -> f32 {
        0.5 + 0.5 * (t * TWINKLE_RATE + self.phase as f64).sin() as f32
    }

    pub fn sprite(&self, t: f64, alpha_cap: f32) -> Sprite {
        let tw = self.twinkle(t);
        let alpha = (self.a * (TWINKLE_ALPHA_BASE + tw * TWINKLE_ALPHA_SPAN)).clamp(0.0, alpha_cap);
        let radius = self.r * (TWINKLE_RADIUS_BASE + tw * TWINKLE_RADIUS_SPAN) * SPRITE_SCALE;
        Sprite {
            center: self.pos,
            radius,
            hue: BASE_HUE + self.hue_shift,
            alpha,
        }
    }
}

#[inline]
fn wrap(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// CSS `hsla()` color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: i16,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: f32,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// One glow sprite: a filled circle painted with a radial gradient from a
/// bright core to transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub center: Vec2,
    pub radius: f32,
    pub hue: i16,
    pub alpha: f32,
}

impl Sprite {
    pub fn stops(&self) -> [(f32, Hsla); 3] {
        let color = |lightness, alpha| Hsla {
            hue: self.hue,
            saturation: SPRITE_SATURATION,
            lightness,
            alpha,
        };
        [
            (0.0, color(SPRITE_CORE_LIGHTNESS, self.alpha)),
            (
                SPRITE_MID_STOP,
                color(SPRITE_EDGE_LIGHTNESS, self.alpha * SPRITE_MID_ALPHA),
            ),
            (1.0, color(SPRITE_EDGE_LIGHTNESS, 0.0)),
        ]
    }
}

/// Soft backdrop drawn under the flies to mute contrast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub size: Vec2,
}

impl Fog {
    pub fn for_viewport(size: Vec2) -> Self {
        Self {
            center: Vec2::new(size.x * 0.5, size.y * FOG_CENTER_Y),
            inner_radius: FOG_INNER_RADIUS,
            outer_radius: size.x.max(size.y),
            size,
        }
    }

    pub fn stops(&self) -> &'static [(f32, &'static str)] {
        &FOG_STOPS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Additive,
}

impl Blend {
    /// Canvas `globalCompositeOperation` value.
    pub fn composite_op(self) -> &'static str {
        match self {
            Blend::Normal => "source-over",
            Blend::Additive => "lighter",
        }
    }
}

/// Drawing surface the field paints into each frame.
pub trait FieldCanvas {
    fn clear(&mut self, size: Vec2);
    fn set_blend(&mut self, blend: Blend);
    fn fill_fog(&mut self, fog: &Fog);
    fn fill_sprite(&mut self, sprite: &Sprite);
}

/// Whether the host should schedule another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

pub struct FireflyField {
    pub params: FieldParams,
    viewport: Viewport,
    flies: Vec<Firefly>,
    rng: StdRng,
}

impl FireflyField {
    pub fn new(params: FieldParams, rng: StdRng) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            flies: Vec::new(),
            rng,
        }
    }

    pub fn from_entropy(params: FieldParams) -> Self {
        Self::new(params, StdRng::from_entropy())
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn flies(&self) -> &[Firefly] {
        &self.flies
    }

    pub fn len(&self) -> usize {
        self.flies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flies.is_empty()
    }

    /// Adopt new viewport metrics and converge on the density target. Existing
    /// flies keep their state; only the tail is added or dropped.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let target = self.params.target_count(&viewport);
        if self.flies.len() > target {
            self.flies.truncate(target);
        }
        while self.flies.len() < target {
            let fly = Firefly::spawn(&mut self.rng, &viewport);
            self.flies.push(fly);
        }
    }

    /// Advance every fly by one frame at timestamp `t` (ms).
    pub fn step(&mut self, t: f64, pointer: &PointerState) {
        let size = self.viewport.size();
        let margin = self.params.wrap_margin;
        let target = pointer.active.then(|| pointer.to_px(size.x, size.y));
        for fly in &mut self.flies {
            fly.wander(t, size, margin);
            if let Some(p) = target {
                fly.attract(p);
            }
        }
    }

    pub fn sprites(&self, t: f64) -> impl Iterator<Item = Sprite> + '_ {
        let cap = self.params.alpha_cap;
        self.flies.iter().map(move |f| f.sprite(t, cap))
    }

    /// Full frame: clear, fog with normal blending, then move and paint each
    /// fly additively.
    pub fn frame<C: FieldCanvas + ?Sized>(
        &mut self,
        t: f64,
        pointer: &PointerState,
        canvas: &mut C,
    ) -> Tick {
        let size = self.viewport.size();
        canvas.clear(size);
        canvas.set_blend(Blend::Normal);
        canvas.fill_fog(&Fog::for_viewport(size));
        canvas.set_blend(Blend::Additive);

        self.step(t, pointer);
        for sprite in self.sprites(t) {
            canvas.fill_sprite(&sprite);
        }
        Tick::Continue
    }
}
