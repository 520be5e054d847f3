/// Tuning constants for the landing-page widgets.
///
/// These keep magic numbers out of the per-frame code and the DOM glue. The
/// particle-field values are gathered into `FieldParams::default()`.

// Firefly density: `FIREFLY_DENSITY` flies per `REFERENCE_WIDTH x REFERENCE_HEIGHT` px
pub const FIREFLY_DENSITY: f64 = 28.0;
pub const REFERENCE_WIDTH: f64 = 1100.0;
pub const REFERENCE_HEIGHT: f64 = 700.0;

// Device pixel ratio clamp for the canvas backing buffer
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Flies wrap to the opposite edge once this far outside the viewport (px)
pub const WRAP_MARGIN: f32 = 20.0;

// Spawn ranges (half-open unless noted)
pub const RADIUS_RANGE: (f32, f32) = (0.9, 1.9);
pub const ALPHA_RANGE: (f32, f32) = (0.06, 0.22);
pub const SPEED_RANGE: (f32, f32) = (0.12, 0.35);
pub const DRIFT_RANGE: (f32, f32) = (0.0012, 0.0045);
pub const HUE_SHIFT_MAX: i16 = 10; // inclusive, symmetric around 0

// Wobble oscillators: rate is per ms of frame time, scale is px per unit drift
pub const WOBBLE_X_RATE: f64 = 0.001;
pub const WOBBLE_Y_RATE: f64 = 0.0012;
pub const WOBBLE_Y_PHASE_MUL: f64 = 1.3;
pub const WOBBLE_X_SCALE: f32 = 120.0;
pub const WOBBLE_Y_SCALE: f32 = 100.0;

// Pointer attraction
pub const PULL_NUMERATOR: f32 = 110.0;
pub const PULL_CAP: f32 = 0.18;
pub const PULL_DAMPING: f32 = 0.05;
pub const PULL_DIST_EPSILON: f32 = 0.001;

// Twinkle
pub const TWINKLE_RATE: f64 = 0.0022;
pub const TWINKLE_ALPHA_BASE: f32 = 0.45;
pub const TWINKLE_ALPHA_SPAN: f32 = 0.65;
pub const TWINKLE_RADIUS_BASE: f32 = 0.95;
pub const TWINKLE_RADIUS_SPAN: f32 = 0.15;
pub const ALPHA_CAP: f32 = 0.38;
pub const ALPHA_CAP_CALM: f32 = 0.28;

// Sprite look
pub const BASE_HUE: i16 = 46; // warm yellow
pub const SPRITE_SCALE: f32 = 12.0; // sprite radius = modulated radius * scale
pub const SPRITE_SATURATION: u8 = 95;
pub const SPRITE_CORE_LIGHTNESS: u8 = 65;
pub const SPRITE_EDGE_LIGHTNESS: u8 = 60;
pub const SPRITE_MID_STOP: f32 = 0.4;
pub const SPRITE_MID_ALPHA: f32 = 0.40;

// Fog backdrop
pub const FOG_CENTER_Y: f32 = 0.35; // fraction of viewport height
pub const FOG_INNER_RADIUS: f32 = 60.0;
pub const FOG_STOPS: [(f32, &str); 3] = [
    (0.0, "rgba(180, 90, 255, 0.07)"),
    (0.45, "rgba(255, 210, 77, 0.05)"),
    (1.0, "rgba(7, 9, 24, 0)"),
];

// Pointer position before the first move event
pub const POINTER_REST: (f32, f32) = (0.5, 0.4);

// Cursor glow overlay
pub const GLOW_RADIUS_PX: u32 = 200;
pub const GLOW_CORE: &str = "#ffd24d22";
pub const GLOW_MID: &str = "#b45aff11";
pub const GLOW_MID_STOP_PCT: u32 = 40;
pub const GLOW_EDGE_STOP_PCT: u32 = 70;

// Background audio
pub const AUDIO_VOLUME: f64 = 0.35;
pub const SOUND_PREF_KEY: &str = "lightbetween_sound";
pub const BOUNCE_CLASS: &str = "bounce";
pub const BOUNCE_MS: i32 = 500;

// Join form
pub const HINT_REQUIRED: &str = "All fields are required.";
pub const HINT_BAD_EMAIL: &str = "Please enter a valid email address.";
pub const HINT_WELCOME: &str = "You\u{2019}re in! Welcome to the community \u{2728}";
pub const HINT_ERROR_CLASS: &str = "error";

// Nav menu
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const NAV_LABEL_OPEN: &str = "Open menu";
pub const NAV_LABEL_CLOSE: &str = "Close menu";

/// Ids and selectors the page provides. Any widget whose anchors are missing
/// is skipped.
#[derive(Clone, Debug)]
pub struct Anchors {
    pub glow_id: &'static str,
    pub canvas_id: &'static str,
    pub audio_id: &'static str,
    pub sound_toggle_id: &'static str,
    pub sound_label_selector: &'static str,
    pub join_form_id: &'static str,
    pub join_submit_selector: &'static str,
    pub join_hint_id: &'static str,
    pub header_selector: &'static str,
    pub nav_toggle_selector: &'static str,
    pub nav_id: &'static str,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            glow_id: "mouse-glow",
            canvas_id: "fireflies",
            audio_id: "bg-music",
            sound_toggle_id: "sound-toggle",
            sound_label_selector: ".sound-label",
            join_form_id: "join-form",
            join_submit_selector: ".join-submit",
            join_hint_id: "join-hint",
            header_selector: ".site-header",
            nav_toggle_selector: ".nav-toggle",
            nav_id: "site-nav",
        }
    }
}
