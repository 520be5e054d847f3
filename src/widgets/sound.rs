//! Background-audio toggle as a two-phase commit.
//!
//! Phase 1 ([`SoundToggle::begin`]) flips the visible state optimistically and
//! hands back a [`PendingToggle`]. Phase 2 ([`SoundToggle::settle`]) either
//! persists the new preference or restores the state the media element is
//! actually in. While a toggle is pending, further requests are ignored.

use super::error::WidgetError;
use super::prefs::{PreferenceStore, SoundPreference};

pub const LABEL_ON: &str = "Sound: On";
pub const LABEL_OFF: &str = "Sound: Off";

/// What the toggle button should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleView {
    pub pressed: bool,
    pub label: &'static str,
}

impl ToggleView {
    pub fn of(pref: SoundPreference) -> Self {
        match pref {
            SoundPreference::On => Self {
                pressed: true,
                label: LABEL_ON,
            },
            SoundPreference::Off => Self {
                pressed: false,
                label: LABEL_OFF,
            },
        }
    }

    /// Value for the `aria-pressed` attribute.
    pub fn aria_pressed(&self) -> &'static str {
        if self.pressed {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingToggle {
    pub target: SoundPreference,
}

impl PendingToggle {
    #[inline]
    pub fn turning_on(&self) -> bool {
        self.target.is_on()
    }

    /// State the media element is in if the operation fails.
    #[inline]
    pub fn fallback(&self) -> SoundPreference {
        self.target.flipped()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Committed(ToggleView),
    RolledBack(ToggleView),
}

impl Settlement {
    pub fn view(&self) -> ToggleView {
        match *self {
            Settlement::Committed(v) | Settlement::RolledBack(v) => v,
        }
    }
}

#[derive(Debug)]
pub struct SoundToggle {
    key: &'static str,
    shown: SoundPreference,
    pending: Option<PendingToggle>,
}

impl SoundToggle {
    /// Restore the button state from the stored preference. This never starts
    /// playback.
    pub fn from_store<S: PreferenceStore + ?Sized>(store: &S, key: &'static str) -> Self {
        Self {
            key,
            shown: SoundPreference::load(store, key),
            pending: None,
        }
    }

    pub fn view(&self) -> ToggleView {
        ToggleView::of(self.shown)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Phase 1. The direction comes from the media element: paused means the
    /// user is turning sound on. Returns `None` while another toggle is in
    /// flight.
    pub fn begin(&mut self, media_paused: bool) -> Option<PendingToggle> {
        if self.pending.is_some() {
            return None;
        }
        let target = if media_paused {
            SoundPreference::On
        } else {
            SoundPreference::Off
        };
        let pending = PendingToggle { target };
        self.shown = target;
        self.pending = Some(pending);
        Some(pending)
    }

    /// Phase 2. On success the preference is written; a failed write is
    /// logged but does not undo a change the media element already made. On
    /// failure the view reverts and the stored preference is left alone.
    pub fn settle<S: PreferenceStore + ?Sized>(
        &mut self,
        pending: PendingToggle,
        outcome: Result<(), WidgetError>,
        store: &mut S,
    ) -> Settlement {
        self.pending = None;
        match outcome {
            Ok(()) => {
                self.shown = pending.target;
                if let Err(e) = store.save(self.key, pending.target.as_str()) {
                    log::warn!("[sound] could not persist preference: {}", e);
                }
                Settlement::Committed(self.view())
            }
            Err(e) => {
                log::warn!("[sound] toggle failed: {}", e);
                self.shown = pending.fallback();
                Settlement::RolledBack(self.view())
            }
        }
    }
}
