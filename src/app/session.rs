// SPDX-License-Identifier: MPL-2.0
//! Settings session: the process-wide owner of the user's theme and language.
//!
//! Setters mutate the in-memory value and hand back the snapshot that must be
//! persisted. A failed save never rolls the value back: for the current
//! session the in-memory settings are the source of truth.

use crate::application::port::BackendError;
use crate::domain::settings::{Language, Settings, ThemeMode};
use crate::ui::theming::{effective_theme, Theme};

/// Intents that change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SetTheme(ThemeMode),
    SetLanguage(Language),
    /// The operating system switched between dark and light.
    SystemThemeChanged(bool),
}

#[derive(Debug, Clone)]
pub struct SettingsSession {
    settings: Settings,
    system_is_dark: bool,
}

impl SettingsSession {
    #[must_use]
    pub fn new(system_is_dark: bool) -> Self {
        Self {
            settings: Settings::default(),
            system_is_dark,
        }
    }

    /// Adopts the loaded settings, or the defaults (dark, Russian) when the
    /// load failed. The failure is logged and goes no further.
    pub fn initialize(&mut self, loaded: Result<Settings, BackendError>) -> Settings {
        self.settings = match loaded {
            Ok(settings) => {
                tracing::info!(theme = %settings.theme, language = %settings.language, "settings loaded");
                settings
            }
            Err(err) => {
                tracing::warn!(error = %err, "settings unavailable, using defaults");
                Settings::default()
            }
        };
        self.settings
    }

    /// Sets the theme and returns the full settings to persist.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Settings {
        self.settings.theme = theme;
        tracing::info!(%theme, effective = %self.effective_theme(), "theme changed");
        self.settings
    }

    /// Sets the language and returns the full settings to persist.
    pub fn set_language(&mut self, language: Language) -> Settings {
        self.settings.language = language;
        tracing::info!(%language, "language changed");
        self.settings
    }

    /// Records a system preference change.
    ///
    /// Returns the new effective theme when it actually changed.
    pub fn set_system_dark(&mut self, system_is_dark: bool) -> Option<Theme> {
        let before = self.effective_theme();
        self.system_is_dark = system_is_dark;
        let after = self.effective_theme();
        (before != after).then_some(after)
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.theme
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.settings.language
    }

    #[must_use]
    pub fn effective_theme(&self) -> Theme {
        effective_theme(self.settings.theme, self.system_is_dark)
    }
}
