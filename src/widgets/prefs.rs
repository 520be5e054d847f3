use super::error::WidgetError;
use std::collections::HashMap;

/// Key/value slot for persisted preferences (browser `localStorage` on the
/// web).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), WidgetError>;
}

/// Volatile store, used when persistent storage is unavailable.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Persisted sound preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SoundPreference {
    On,
    #[default]
    Off,
}

impl SoundPreference {
    /// Anything other than `"on"` (including nothing stored) reads as off.
    pub fn parse(saved: Option<&str>) -> Self {
        match saved {
            Some("on") => SoundPreference::On,
            _ => SoundPreference::Off,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SoundPreference::On => "on",
            SoundPreference::Off => "off",
        }
    }

    pub fn is_on(self) -> bool {
        self == SoundPreference::On
    }

    pub fn flipped(self) -> Self {
        match self {
            SoundPreference::On => SoundPreference::Off,
            SoundPreference::Off => SoundPreference::On,
        }
    }

    pub fn load<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Self {
        Self::parse(store.load(key).as_deref())
    }
}
