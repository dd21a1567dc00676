// SPDX-License-Identifier: MPL-2.0
//! Currency records as delivered by the backend catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CurrencyCode
// =============================================================================

/// Currency code such as `USD` or `BTC`.
///
/// Codes are the only handle components keep on a currency; full records are
/// resolved through the catalog. Construction trims and upper-cases the input
/// so user-typed codes compare equal to catalog codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the code is empty (e.g. a failed backend response).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Whether a currency is a national currency or a crypto asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    Fiat,
    Crypto,
}

/// A supported currency. Immutable once loaded into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CurrencyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Flag image URI (fiat currencies).
    #[serde(default, rename = "flag", skip_serializing_if = "Option::is_none")]
    pub flag_image: Option<String>,
    /// Logo image URI (crypto currencies).
    #[serde(default, rename = "icon", skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
}

impl Currency {
    /// Returns the image shown next to the code.
    ///
    /// Fiat currencies use their flag and crypto currencies their icon; a
    /// record lacking the matching image yields `None` and the image is hidden.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        let image = match self.kind {
            CurrencyKind::Fiat => self.flag_image.as_deref(),
            CurrencyKind::Crypto => self.icon_image.as_deref(),
        };
        image.filter(|uri| !uri.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fiat(code: &str, flag: Option<&str>) -> Currency {
        Currency {
            code: CurrencyCode::new(code),
            name: code.to_string(),
            kind: CurrencyKind::Fiat,
            symbol: None,
            flag_image: flag.map(str::to_string),
            icon_image: None,
        }
    }

    #[test]
    fn code_is_normalized() {
        assert_eq!(CurrencyCode::new(" usd "), CurrencyCode::new("USD"));
        assert_eq!(CurrencyCode::from("btc").as_str(), "BTC");
    }

    #[test]
    fn fiat_uses_flag_image() {
        let usd = fiat("USD", Some("https://flagcdn.com/w40/us.png"));
        assert_eq!(usd.image(), Some("https://flagcdn.com/w40/us.png"));
    }

    #[test]
    fn crypto_ignores_flag_and_uses_icon() {
        let btc = Currency {
            code: CurrencyCode::new("BTC"),
            name: "Bitcoin".into(),
            kind: CurrencyKind::Crypto,
            symbol: Some("₿".into()),
            flag_image: Some("https://example.invalid/flag.png".into()),
            icon_image: None,
        };
        assert_eq!(btc.image(), None);
    }

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{"code":"EUR","name":"Euro","type":"fiat","symbol":"€","flag":"https://flagcdn.com/w40/eu.png"}"#;
        let eur: Currency = serde_json::from_str(json).expect("valid currency json");
        assert_eq!(eur.code.as_str(), "EUR");
        assert_eq!(eur.kind, CurrencyKind::Fiat);
        assert_eq!(eur.symbol.as_deref(), Some("€"));
        assert!(eur.icon_image.is_none());
    }
}
