use easycrop_core::config::KeyConfig;
use tracing::warn;

/// Global shortcuts resolved from config key names.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyBindings {
    pub previous: egui::Key,
    pub next: egui::Key,
    pub save: egui::Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            previous: egui::Key::A,
            next: egui::Key::D,
            save: egui::Key::Space,
        }
    }
}

impl KeyBindings {
    /// Unknown key names fall back to the defaults.
    pub fn from_config(keys: &KeyConfig) -> Self {
        let defaults = Self::default();
        Self {
            previous: parse_key(&keys.previous, defaults.previous),
            next: parse_key(&keys.next, defaults.next),
            save: parse_key(&keys.save, defaults.save),
        }
    }
}

fn parse_key(name: &str, fallback: egui::Key) -> egui::Key {
    egui::Key::from_name(name).unwrap_or_else(|| {
        warn!(key = name, fallback = fallback.name(), "Unknown key name");
        fallback
    })
}
