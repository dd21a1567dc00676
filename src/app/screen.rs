// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Converter,
    Rates,
    Settings,
    About,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Converter,
        Screen::Rates,
        Screen::Settings,
        Screen::About,
    ];

    /// Navigation label key.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Screen::Converter => "nav.converter",
            Screen::Rates => "nav.rates",
            Screen::Settings => "nav.settings",
            Screen::About => "nav.about",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Converter => "converter",
            Screen::Rates => "rates",
            Screen::Settings => "settings",
            Screen::About => "about",
        }
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == value)
            .ok_or_else(|| format!("unknown page: {s}"))
    }
}
