// SPDX-License-Identifier: MPL-2.0
//! Backend port definition.
//!
//! The [`Backend`] trait is the whole contract the client needs from the
//! conversion service. Business failures of a conversion are *not* errors at
//! this level: they come back as `ConversionResult { ok: false, .. }`.
//! [`BackendError`] is reserved for transport-level faults.

use crate::domain::conversion::{ConversionRequest, ConversionResult};
use crate::domain::currency::{Currency, CurrencyCode};
use crate::domain::rates::RateRow;
use crate::domain::settings::Settings;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// BackendError
// =============================================================================

/// Transport-level failure: the backend was unreachable, slow, or answered
/// with something unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend did not answer within {0:?}")]
    Timeout(Duration),

    #[error("backend answered with HTTP status {0}")]
    Status(u16),

    #[error("malformed backend response: {0}")]
    Decode(String),

    #[error("settings storage failed: {0}")]
    Storage(String),
}

// =============================================================================
// Backend Trait
// =============================================================================

/// Remote operations consumed by the client.
///
/// Implementations must be cheap to share (`Send + Sync`); the runtime holds
/// one instance behind an `Arc` for the whole session.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Loads the persisted settings.
    async fn load_settings(&self) -> Result<Settings, BackendError>;

    /// Persists the full settings object.
    async fn save_settings(&self, settings: Settings) -> Result<(), BackendError>;

    /// Lists every supported currency.
    async fn list_currencies(&self) -> Result<Vec<Currency>, BackendError>;

    /// Converts an amount. A declined conversion is `Ok` with `ok == false`.
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, BackendError>;

    /// Returns the server-side rate ladder for a pair.
    async fn rate_ladder(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Vec<RateRow>, BackendError>;
}
