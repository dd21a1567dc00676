// SPDX-License-Identifier: MPL-2.0
//! Conversion request and result shapes.

use crate::domain::currency::{Amount, CurrencyCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated conversion attempt, created per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub amount: Amount,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

/// Backend answer to a conversion request.
///
/// When `ok` is `false`, `converted_amount` and `rate` carry no meaning and
/// only `error_message` may be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[serde(default, with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub from: CurrencyCode,
    #[serde(default)]
    pub to: CurrencyCode,
    #[serde(default, rename = "result", with = "rust_decimal::serde::float")]
    pub converted_amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Already a display string; surfaced verbatim.
    #[serde(default)]
    pub last_update: String,
    #[serde(rename = "success")]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
