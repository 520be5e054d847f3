use super::constants::{GLOW_CORE, GLOW_EDGE_STOP_PCT, GLOW_MID, GLOW_MID_STOP_PCT, GLOW_RADIUS_PX};
use super::pointer::PointerState;

/// CSS `background` for the cursor glow overlay centered at the given
/// percentages of the viewport.
pub fn glow_background(x_pct: f32, y_pct: f32) -> String {
    format!(
        "radial-gradient({GLOW_RADIUS_PX}px circle at {x_pct}% {y_pct}%, \
         {GLOW_CORE}, {GLOW_MID} {GLOW_MID_STOP_PCT}%, transparent {GLOW_EDGE_STOP_PCT}%)"
    )
}

#[inline]
pub fn glow_for_pointer(pointer: &PointerState) -> String {
    glow_background(pointer.uv.x * 100.0, pointer.uv.y * 100.0)
}
