// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translation tables are embedded at build time from `assets/i18n/*.toml`,
//! one file per [`Language`]. Text is resolved by key with optional named
//! parameters; a key missing from the active table resolves to the key itself
//! so gaps stay visible without failing.
//!
//! # Features
//!
//! - Locale detection from the CLI or system settings (`auto`)
//! - Runtime language switching with a revision counter that drives a full
//!   text refresh in the presentation layer
//! - `{name}` placeholder substitution

pub mod table;

pub use table::{interpolate, TranslationTable};

use crate::domain::settings::Language;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Active translation tables plus the selected language.
#[derive(Debug, Clone)]
pub struct I18n {
    tables: HashMap<Language, TranslationTable>,
    current: Language,
    revision: u64,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl I18n {
    /// Loads the embedded tables and selects `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let mut tables = HashMap::new();

        for language in Language::ALL {
            let filename = format!("{}.toml", language.code());
            let Some(content) = Asset::get(&filename) else {
                tracing::error!(file = %filename, "translation table is not embedded");
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref());
            match TranslationTable::parse(&source) {
                Ok(table) => {
                    tables.insert(language, table);
                }
                Err(err) => {
                    tracing::error!(file = %filename, error = %err, "translation table is malformed");
                }
            }
        }

        Self::from_tables(tables, language)
    }

    /// Builds a resolver over caller-supplied tables.
    #[must_use]
    pub fn from_tables(tables: HashMap<Language, TranslationTable>, language: Language) -> Self {
        Self {
            tables,
            current: language,
            revision: 0,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.current
    }

    /// Languages that have a loaded table.
    #[must_use]
    pub fn available_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.tables.contains_key(language))
            .collect()
    }

    /// Switches the active table.
    ///
    /// Every call bumps [`revision`](Self::revision), including a call with
    /// the language already active: observers re-resolve all visible text
    /// once per call.
    pub fn set_language(&mut self, language: Language) {
        self.current = language;
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(language = %language, revision = self.revision, "language applied");
    }

    /// Number of `set_language` calls so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolves `key` without parameters.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.resolve::<&str, &str>(key, &[])
    }

    /// Resolves `key` in the active table and fills `{name}` placeholders.
    ///
    /// Falls back to the raw key when the active table lacks it.
    #[must_use]
    pub fn resolve<K, V>(&self, key: &str, params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match self
            .tables
            .get(&self.current)
            .and_then(|table| table.get(key))
        {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }
}

/// Maps a locale tag (`en-US`, `ru_RU`, `en`) to a supported language.
#[must_use]
pub fn language_from_locale(locale: &str) -> Option<Language> {
    let normalized = locale.trim().replace('_', "-");
    let normalized = normalized.split('.').next().unwrap_or_default();
    let id = normalized.parse::<LanguageIdentifier>().ok()?;
    Language::ALL
        .into_iter()
        .find(|language| id.language.as_str() == language.code())
}

/// Resolves a `--lang` value: `auto` asks the operating system, anything
/// else is read as a locale tag. Returns `None` when nothing matches.
#[must_use]
pub fn resolve_cli_language(value: &str) -> Option<Language> {
    if value.trim().eq_ignore_ascii_case("auto") {
        sys_locale::get_locale().and_then(|locale| language_from_locale(&locale))
    } else {
        language_from_locale(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_with_parameters_in_english() {
        let i18n = I18n::new(Language::En);
        assert_eq!(
            i18n.resolve("converter.updated", &[("time", "12:00")]),
            "Updated: 12:00"
        );
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.tr("x.y"), "x.y");
    }

    #[test]
    fn russian_is_default() {
        let i18n = I18n::default();
        assert_eq!(i18n.language(), Language::Ru);
        assert_eq!(i18n.tr("toast.settings_saved"), "Настройки сохранены");
    }

    #[test]
    fn embedded_tables_share_keys() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.available_languages(), vec![Language::Ru, Language::En]);

        let en = &i18n.tables[&Language::En];
        let ru = &i18n.tables[&Language::Ru];
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut ru_keys: Vec<_> = ru.keys().collect();
        en_keys.sort_unstable();
        ru_keys.sort_unstable();
        assert_eq!(en_keys, ru_keys);
    }

    #[test]
    fn set_language_is_idempotent_but_always_refreshes() {
        let mut i18n = I18n::new(Language::Ru);

        i18n.set_language(Language::En);
        let first = i18n.tr("nav.rates");
        i18n.set_language(Language::En);
        let second = i18n.tr("nav.rates");

        assert_eq!(first, "Rates Table");
        assert_eq!(first, second);
        assert_eq!(i18n.revision(), 2);
    }

    #[test]
    fn missing_table_falls_back_to_keys() {
        let tables = HashMap::from([(
            Language::En,
            TranslationTable::from_iter([("nav.about", "About")]),
        )]);
        let i18n = I18n::from_tables(tables, Language::Ru);
        assert_eq!(i18n.tr("nav.about"), "nav.about");
    }

    #[test]
    fn locale_tags_map_to_languages() {
        assert_eq!(language_from_locale("en-US"), Some(Language::En));
        assert_eq!(language_from_locale("ru_RU.UTF-8"), Some(Language::Ru));
        assert_eq!(language_from_locale("ru"), Some(Language::Ru));
        assert_eq!(language_from_locale("de-DE"), None);
        assert_eq!(language_from_locale("not a locale"), None);
    }

    #[test]
    fn cli_language_accepts_plain_codes() {
        assert_eq!(resolve_cli_language("EN"), Some(Language::En));
        assert_eq!(resolve_cli_language("fr"), None);
    }
}
