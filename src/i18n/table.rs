// SPDX-License-Identifier: MPL-2.0
//! Translation tables and template substitution.

use std::collections::HashMap;

/// Key to template mapping for one language.
///
/// Keys are dotted paths (`converter.updated`). Templates may contain
/// `{name}` placeholders filled by [`interpolate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Parses a flat TOML document of quoted keys and string values.
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<HashMap<String, String>>(source).map(|entries| Self { entries })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Replaces every `{name}` in `template` whose name appears in `params`.
///
/// Single pass: substituted values are never scanned again, placeholders
/// without a parameter are kept verbatim, and braces are not escapable.
#[must_use]
pub fn interpolate<K, V>(template: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(['{', '}']) {
            Some(close) if after[close..].starts_with('}') => {
                let name = &after[..close];
                match params.iter().find(|(key, _)| key.as_ref() == name) {
                    Some((_, value)) => out.push_str(value.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            // Unclosed or nested brace: emit it and keep scanning.
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_dotted_keys() {
        let table = TranslationTable::parse(
            r#"
"converter.updated" = "Updated: {time}"
"error.api" = "Failed"
"error.api.detail" = "{message}"
"#,
        )
        .expect("valid table");

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("converter.updated"), Some("Updated: {time}"));
        assert_eq!(table.get("error.api.detail"), Some("{message}"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(TranslationTable::parse("\"a.b\" = 3").is_err());
    }

    #[test]
    fn replaces_named_placeholder() {
        assert_eq!(
            interpolate("Updated: {time}", &[("time", "12:00")]),
            "Updated: 12:00"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            interpolate("{x} and {x}", &[("x", "1")]),
            "1 and 1"
        );
    }

    #[test]
    fn keeps_unknown_placeholders() {
        assert_eq!(
            interpolate("{from} = {to}", &[("from", "1 USD")]),
            "1 USD = {to}"
        );
    }

    #[test]
    fn does_not_substitute_recursively() {
        assert_eq!(
            interpolate("{a}", &[("a", "{b}"), ("b", "nope")]),
            "{b}"
        );
    }

    #[test]
    fn tolerates_stray_braces() {
        assert_eq!(interpolate("{ {x}", &[("x", "1")]), "{ 1");
        assert_eq!(interpolate("tail {x", &[("x", "1")]), "tail {x");
        assert_eq!(interpolate("}{x}", &[("x", "1")]), "}1");
    }

    #[test]
    fn no_params_returns_template() {
        let empty: &[(&str, &str)] = &[];
        assert_eq!(interpolate("{time}", empty), "{time}");
    }
}
