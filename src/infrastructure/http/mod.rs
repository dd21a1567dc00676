// SPDX-License-Identifier: MPL-2.0
//! JSON-over-HTTP backend adapter.
//!
//! Currency data comes from the conversion service:
//!
//! | Operation        | Request                              |
//! |------------------|--------------------------------------|
//! | list currencies  | `GET  {url}/currencies`              |
//! | convert          | `POST {url}/convert` `{amount,from,to}` |
//! | rate ladder      | `GET  {url}/rates?from=..&to=..`     |
//!
//! Settings never leave the machine: they live in the `[general]` section of
//! the local `settings.toml`, read and written on the blocking pool.

use crate::application::port::{Backend, BackendError};
use crate::config::{self, BackendConfig};
use crate::domain::conversion::{ConversionRequest, ConversionResult};
use crate::domain::currency::{Currency, CurrencyCode};
use crate::domain::rates::RateRow;
use crate::domain::settings::Settings;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Body of `POST /convert`.
#[derive(Debug, Serialize)]
struct ConvertBody<'a> {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    from: &'a str,
    to: &'a str,
}

/// Backend talking to the conversion service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    settings_path: Option<PathBuf>,
}

impl HttpBackend {
    /// Builds the client. `settings_path` is the local `settings.toml`; with
    /// `None` settings operations fail with [`BackendError::Storage`].
    pub fn new(config: &BackendConfig, settings_path: Option<PathBuf>) -> Result<Self, BackendError> {
        let timeout = config.timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("skyventor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| BackendError::Unreachable(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            timeout,
            settings_path,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| self.map_error(err))?;
        response.json::<T>().await.map_err(|err| self.map_error(err))
    }

    fn map_error(&self, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout(self.timeout)
        } else if let Some(status) = err.status() {
            BackendError::Status(status.as_u16())
        } else if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Unreachable(err.to_string())
        }
    }

    fn settings_path(&self) -> Result<PathBuf, BackendError> {
        self.settings_path
            .clone()
            .ok_or_else(|| BackendError::Storage("no config directory available".into()))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn load_settings(&self) -> Result<Settings, BackendError> {
        let path = self.settings_path()?;
        tokio::task::spawn_blocking(move || config::load_settings_from_path(&path))
            .await
            .map_err(|err| BackendError::Storage(err.to_string()))?
            .map_err(|err| BackendError::Storage(err.to_string()))
    }

    async fn save_settings(&self, settings: Settings) -> Result<(), BackendError> {
        let path = self.settings_path()?;
        tokio::task::spawn_blocking(move || config::save_settings_to_path(settings, &path))
            .await
            .map_err(|err| BackendError::Storage(err.to_string()))?
            .map_err(|err| BackendError::Storage(err.to_string()))
    }

    async fn list_currencies(&self) -> Result<Vec<Currency>, BackendError> {
        self.fetch(self.client.get(self.endpoint("currencies")))
            .await
    }

    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, BackendError> {
        let body = ConvertBody {
            amount: request.amount.value(),
            from: request.from.as_str(),
            to: request.to.as_str(),
        };
        self.fetch(self.client.post(self.endpoint("convert")).json(&body))
            .await
    }

    async fn rate_ladder(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Vec<RateRow>, BackendError> {
        self.fetch(
            self.client
                .get(self.endpoint("rates"))
                .query(&[("from", from.as_str()), ("to", to.as_str())]),
        )
        .await
    }
}
