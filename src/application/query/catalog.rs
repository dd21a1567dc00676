// SPDX-License-Identifier: MPL-2.0
//! Currency catalog cache.
//!
//! The catalog is fetched once per session and then answers lookups from
//! memory. It is the only owner of full [`Currency`] records; every other
//! component keeps a [`CurrencyCode`] and resolves it here.

use crate::application::port::BackendError;
use crate::domain::currency::{Currency, CurrencyCode};
use std::collections::HashSet;

/// Session cache of supported currencies.
#[derive(Debug, Default)]
pub struct CurrencyCatalog {
    currencies: Vec<Currency>,
    loaded: bool,
}

impl CurrencyCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome of the one `ListCurrencies` round trip.
    ///
    /// On failure the cache stays empty and the error is handed back so the
    /// caller can report it; the application keeps running with empty
    /// selection lists. Duplicate codes keep their first record.
    pub fn populate(
        &mut self,
        result: Result<Vec<Currency>, BackendError>,
    ) -> Result<usize, BackendError> {
        self.loaded = true;
        self.currencies.clear();

        let currencies = result?;
        let mut seen = HashSet::new();
        for currency in currencies {
            if seen.insert(currency.code.clone()) {
                self.currencies.push(currency);
            } else {
                tracing::warn!(code = %currency.code, "duplicate currency in catalog ignored");
            }
        }
        Ok(self.currencies.len())
    }

    /// Returns `true` once a load attempt has completed, successful or not.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    #[must_use]
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// In-memory lookup. A miss is a normal outcome (e.g. stale selection).
    #[must_use]
    pub fn find_by_code(&self, code: &CurrencyCode) -> Option<&Currency> {
        self.currencies.iter().find(|currency| &currency.code == code)
    }

    #[must_use]
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Image to show next to `code`, or `None` to hide it.
    #[must_use]
    pub fn image_for(&self, code: &CurrencyCode) -> Option<&str> {
        self.find_by_code(code).and_then(Currency::image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::CurrencyKind;

    fn currency(code: &str, kind: CurrencyKind, image: &str) -> Currency {
        let (flag_image, icon_image) = match kind {
            CurrencyKind::Fiat => (Some(image.to_string()), None),
            CurrencyKind::Crypto => (None, Some(image.to_string())),
        };
        Currency {
            code: CurrencyCode::new(code),
            name: code.to_string(),
            kind,
            symbol: None,
            flag_image,
            icon_image,
        }
    }

    fn sample() -> Vec<Currency> {
        vec![
            currency("USD", CurrencyKind::Fiat, "https://flagcdn.com/w40/us.png"),
            currency("RUB", CurrencyKind::Fiat, "https://flagcdn.com/w40/ru.png"),
            currency(
                "BTC",
                CurrencyKind::Crypto,
                "https://cryptologos.cc/logos/bitcoin-btc-logo.png",
            ),
        ]
    }

    #[test]
    fn new_catalog_is_empty_and_unloaded() {
        let catalog = CurrencyCatalog::new();
        assert!(catalog.is_empty());
        assert!(!catalog.is_loaded());
    }

    #[test]
    fn populate_stores_currencies() {
        let mut catalog = CurrencyCatalog::new();
        let count = catalog.populate(Ok(sample())).expect("load succeeds");

        assert_eq!(count, 3);
        assert!(catalog.is_loaded());
        assert_eq!(
            catalog
                .find_by_code(&CurrencyCode::new("btc"))
                .map(|c| c.name.as_str()),
            Some("BTC")
        );
    }

    #[test]
    fn failed_load_leaves_cache_empty() {
        let mut catalog = CurrencyCatalog::new();
        let err = catalog
            .populate(Err(BackendError::Unreachable("connection refused".into())))
            .expect_err("load fails");

        assert!(matches!(err, BackendError::Unreachable(_)));
        assert!(catalog.is_loaded());
        assert!(catalog.is_empty());
    }

    #[test]
    fn unknown_code_is_not_found() {
        let mut catalog = CurrencyCatalog::new();
        catalog.populate(Ok(sample())).expect("load succeeds");

        let xyz = CurrencyCode::new("XYZ");
        assert!(catalog.find_by_code(&xyz).is_none());
        assert!(catalog.image_for(&xyz).is_none());
    }

    #[test]
    fn image_follows_currency_kind() {
        let mut catalog = CurrencyCatalog::new();
        catalog.populate(Ok(sample())).expect("load succeeds");

        assert_eq!(
            catalog.image_for(&CurrencyCode::new("USD")),
            Some("https://flagcdn.com/w40/us.png")
        );
        assert_eq!(
            catalog.image_for(&CurrencyCode::new("BTC")),
            Some("https://cryptologos.cc/logos/bitcoin-btc-logo.png")
        );
    }

    #[test]
    fn duplicate_codes_keep_first_record() {
        let mut list = sample();
        let mut shadow = currency("USD", CurrencyKind::Fiat, "https://example.invalid/us.png");
        shadow.name = "Shadow Dollar".into();
        list.push(shadow);

        let mut catalog = CurrencyCatalog::new();
        assert_eq!(catalog.populate(Ok(list)).expect("load succeeds"), 3);
        assert_eq!(
            catalog
                .find_by_code(&CurrencyCode::new("USD"))
                .map(|c| c.name.as_str()),
            Some("USD")
        );
    }
}
