use super::constants::POINTER_REST;
use glam::Vec2;

/// Latest pointer position in normalized viewport space, shared by the glow
/// overlay and the firefly field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub uv: Vec2,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            uv: Vec2::new(POINTER_REST.0, POINTER_REST.1),
            active: false,
        }
    }
}

impl PointerState {
    /// Record a move event. A zero-sized viewport keeps the previous position
    /// but still marks the pointer active.
    pub fn on_move(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        if let Some(uv) = normalize(client_x, client_y, viewport_w, viewport_h) {
            self.uv = uv;
        }
        self.active = true;
    }

    pub fn on_leave(&mut self) {
        self.active = false;
    }

    /// Pointer position in CSS pixels for a viewport of the given size.
    #[inline]
    pub fn to_px(&self, width: f32, height: f32) -> Vec2 {
        Vec2::new(self.uv.x * width, self.uv.y * height)
    }
}

#[inline]
pub fn normalize(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Option<Vec2> {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return None;
    }
    let u = (client_x / viewport_w).clamp(0.0, 1.0) as f32;
    let v = (client_y / viewport_h).clamp(0.0, 1.0) as f32;
    (u.is_finite() && v.is_finite()).then(|| Vec2::new(u, v))
}
