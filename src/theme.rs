//! Light/dark theme toggle persisted across launches.

use crate::cache::PreferenceStore;
use iced::Theme as IcedTheme;
use tracing::{info, warn};

/// The two values the toggle itself produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the applied theme value and its persisted copy.
///
/// Stored values are not validated: whatever string was persisted is kept as
/// the applied value and mapped to a palette by name.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    applied: String,
    store: PreferenceStore,
}

impl ThemeToggle {
    pub fn load(store: PreferenceStore) -> Self {
        let applied = store
            .load_theme()
            .unwrap_or_else(|| ThemePreference::Light.as_str().to_string());
        Self { applied, store }
    }

    pub fn applied(&self) -> &str {
        &self.applied
    }

    pub fn is_dark(&self) -> bool {
        self.applied == ThemePreference::Dark.as_str()
    }

    /// Flip `dark` to `light` and anything else to `dark`, then persist.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = if self.is_dark() {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.applied = next.as_str().to_string();
        info!(theme = %next, "Toggled theme");
        if let Err(err) = self.store.save_theme(next.as_str()) {
            warn!(path = %self.store.path().display(), "Failed to persist theme: {err:#}");
        }
        next
    }

    /// Palette for the applied value: `light`/`dark`, a built-in theme of the
    /// same name, or the light palette.
    pub fn iced_theme(&self) -> IcedTheme {
        match self.applied.as_str() {
            "light" => IcedTheme::Light,
            "dark" => IcedTheme::Dark,
            other => IcedTheme::ALL
                .iter()
                .find(|theme| theme.to_string().eq_ignore_ascii_case(other))
                .cloned()
                .unwrap_or(IcedTheme::Light),
        }
    }

    /// Label for the toggle button: the mode it switches to.
    pub fn button_label(&self) -> &'static str {
        if self.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}
