// SPDX-License-Identifier: MPL-2.0
//! Theme resolution.
//!
//! A stored [`ThemeMode`] is turned into one effective [`Theme`] with the live
//! system preference as the tie-breaker for `auto`.

pub use crate::domain::settings::ThemeMode;

use std::fmt;

/// The theme actually applied to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a preference and the system preference to the effective theme.
#[must_use]
pub fn effective_theme(mode: ThemeMode, system_is_dark: bool) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Light => Theme::Light,
        ThemeMode::Auto if system_is_dark => Theme::Dark,
        ThemeMode::Auto => Theme::Light,
    }
}

/// Reads the operating system preference.
///
/// Detection failures count as dark.
#[must_use]
pub fn system_prefers_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_system() {
        assert_eq!(effective_theme(ThemeMode::Auto, true), Theme::Dark);
        assert_eq!(effective_theme(ThemeMode::Auto, false), Theme::Light);
    }

    #[test]
    fn explicit_modes_ignore_system() {
        assert_eq!(effective_theme(ThemeMode::Light, true), Theme::Light);
        assert_eq!(effective_theme(ThemeMode::Dark, false), Theme::Dark);
    }

    #[test]
    fn system_detection_does_not_panic() {
        let _ = system_prefers_dark();
    }
}
