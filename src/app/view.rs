// SPDX-License-Identifier: MPL-2.0
//! View composition for the terminal surface.
//!
//! [`Labels`] holds every static translated string. It is rebuilt as a whole
//! whenever the language changes, so a frame never mixes two languages.
//! [`render`] turns the application state into plain text.

use std::fmt::Write as _;

use super::{App, Screen};
use crate::domain::currency::CurrencyCode;
use crate::domain::settings::{Language, ThemeMode};
use crate::i18n::I18n;
use crate::ui::converter::Phase;

/// Crate version shown on the about screen.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
const TECHNOLOGIES: &str = "Rust, tokio, reqwest, rust_decimal";

/// Resolved static text of every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub nav: [(Screen, String); 4],
    pub converter_title: String,
    pub converter_amount: String,
    pub converter_button: String,
    pub converter_loading: String,
    pub rates_title: String,
    pub rates_multiplier: String,
    pub rates_empty: String,
    pub settings_title: String,
    pub settings_theme: String,
    pub settings_language: String,
    pub theme_options: [(ThemeMode, String); 3],
    pub language_options: [(Language, String); 2],
    pub settings_info: String,
    pub about_title: String,
    pub about_version: String,
    pub about_author: String,
    pub about_tech: String,
    pub about_github: String,
    pub footer: String,
}

impl Labels {
    /// Resolves every label through the active table.
    #[must_use]
    pub fn resolve(i18n: &I18n) -> Self {
        Self {
            nav: Screen::ALL.map(|screen| (screen, i18n.tr(screen.nav_key()))),
            converter_title: i18n.tr("converter.title"),
            converter_amount: i18n.tr("converter.amount"),
            converter_button: i18n.tr("converter.button"),
            converter_loading: i18n.tr("converter.loading"),
            rates_title: i18n.tr("rates.title"),
            rates_multiplier: i18n.tr("rates.multiplier"),
            rates_empty: i18n.tr("rates.empty"),
            settings_title: i18n.tr("settings.title"),
            settings_theme: i18n.tr("settings.theme"),
            settings_language: i18n.tr("settings.language"),
            theme_options: ThemeMode::ALL
                .map(|mode| (mode, i18n.tr(&format!("settings.theme.{}", mode.as_str())))),
            language_options: Language::ALL.map(|language| {
                (
                    language,
                    i18n.tr(&format!("settings.language.{}", language.code())),
                )
            }),
            settings_info: i18n.tr("settings.info"),
            about_title: i18n.tr("about.title"),
            about_version: i18n.resolve("about.version", &[("version", APP_VERSION)]),
            about_author: i18n.tr("about.author"),
            about_tech: i18n.tr("about.tech"),
            about_github: i18n.tr("about.github"),
            footer: i18n.tr("footer.text"),
        }
    }
}

/// Renders the whole frame: navigation, active screen, toasts, footer.
#[must_use]
pub fn render(app: &App) -> String {
    let labels = app.labels();
    let mut out = String::new();

    let nav: Vec<String> = labels
        .nav
        .iter()
        .map(|(screen, label)| {
            if *screen == app.screen() {
                format!("[{label}]")
            } else {
                label.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "== {} ==  ({})", nav.join(" | "), app.theme());

    match app.screen() {
        Screen::Converter => render_converter(app, &mut out),
        Screen::Rates => render_rates(app, &mut out),
        Screen::Settings => render_settings(app, &mut out),
        Screen::About => render_about(app, &mut out),
    }

    for notification in app.notifications().visible() {
        let _ = writeln!(
            out,
            "  {} {}",
            notification.severity().icon(),
            notification.text(app.i18n())
        );
    }
    let _ = write!(out, "-- {} --", labels.footer);
    out
}

fn currency_label(app: &App, code: &CurrencyCode) -> String {
    match app.catalog().image_for(code) {
        Some(image) => format!("{code} <{image}>"),
        None => code.to_string(),
    }
}

fn render_converter(app: &App, out: &mut String) {
    let labels = app.labels();
    let converter = app.converter();

    let _ = writeln!(out, "{}", labels.converter_title);
    let _ = writeln!(
        out,
        "  {}: {}  {} -> {}",
        labels.converter_amount,
        converter.amount_input(),
        currency_label(app, converter.from()),
        currency_label(app, converter.to()),
    );

    if converter.phase() == Phase::Pending {
        let _ = writeln!(out, "  ... {}", labels.converter_loading);
    } else {
        let _ = writeln!(out, "  [{}]", labels.converter_button);
    }

    if let Some(display) = converter.display() {
        let _ = writeln!(out, "  = {}", display.converted_amount);
        let _ = writeln!(out, "  {}", display.unit_rate);
        let _ = writeln!(
            out,
            "  {}",
            app.i18n()
                .resolve("converter.updated", &[("time", display.last_update.as_str())])
        );
        for row in &display.ladder {
            let _ = writeln!(
                out,
                "    {:>6}  {} = {}",
                row.multiplier_text(),
                row.source_text(),
                row.target_text()
            );
        }
    }
}

fn render_rates(app: &App, out: &mut String) {
    let labels = app.labels();
    let rates = app.rates();

    let _ = writeln!(
        out,
        "{}  {} -> {}",
        labels.rates_title,
        currency_label(app, rates.from()),
        currency_label(app, rates.to())
    );

    let table = rates.table();
    if table.is_empty() {
        let _ = writeln!(out, "  {}", labels.rates_empty);
        return;
    }

    let _ = writeln!(
        out,
        "  {:>10}  {:>16}  {:>16}",
        labels.rates_multiplier,
        rates.from(),
        rates.to()
    );
    for [multiplier, source, target] in table {
        let _ = writeln!(out, "  {multiplier:>10}  {source:>16}  {target:>16}");
    }
}

fn render_settings(app: &App, out: &mut String) {
    let labels = app.labels();
    let settings = app.settings();

    let _ = writeln!(out, "{}", labels.settings_title);

    let themes: Vec<String> = labels
        .theme_options
        .iter()
        .map(|(mode, label)| marked(*mode == settings.theme, label))
        .collect();
    let _ = writeln!(out, "  {}: {}", labels.settings_theme, themes.join(" "));

    let languages: Vec<String> = labels
        .language_options
        .iter()
        .map(|(language, label)| marked(*language == settings.language, label))
        .collect();
    let _ = writeln!(
        out,
        "  {}: {}",
        labels.settings_language,
        languages.join(" ")
    );
    let _ = writeln!(out, "  {}", labels.settings_info);
}

fn render_about(app: &App, out: &mut String) {
    let labels = app.labels();
    let _ = writeln!(out, "{}", labels.about_title);
    let _ = writeln!(out, "  {}", labels.about_version);
    if !AUTHORS.is_empty() {
        let _ = writeln!(out, "  {} {}", labels.about_author, AUTHORS.replace(':', ", "));
    }
    let _ = writeln!(out, "  {} {TECHNOLOGIES}", labels.about_tech);
    if !REPOSITORY_URL.is_empty() {
        let _ = writeln!(out, "  {}: {REPOSITORY_URL}", labels.about_github);
    }
}

fn marked(selected: bool, label: &str) -> String {
    if selected {
        format!("(*) {label}")
    } else {
        format!("( ) {label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_language() {
        let ru = Labels::resolve(&I18n::new(Language::Ru));
        let en = Labels::resolve(&I18n::new(Language::En));

        assert_eq!(en.converter_button, "Convert");
        assert_ne!(ru.converter_button, en.converter_button);
        assert_eq!(en.nav[1], (Screen::Rates, "Rates Table".to_string()));
    }

    #[test]
    fn about_version_is_interpolated() {
        let en = Labels::resolve(&I18n::new(Language::En));
        assert_eq!(en.about_version, format!("Version {APP_VERSION} (Stable)"));
    }

    #[test]
    fn option_labels_cover_every_choice() {
        let en = Labels::resolve(&I18n::new(Language::En));
        assert_eq!(en.theme_options[2], (ThemeMode::Auto, "Auto".to_string()));
        assert_eq!(en.language_options[0], (Language::Ru, "Русский".to_string()));
    }
}
