// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core conversion types and rules.
//!
//! This module contains pure value types and business rules. Besides `std` it
//! only relies on `serde` (wire shapes), `rust_decimal` (money arithmetic) and
//! `thiserror` (error types), so everything here is testable without a backend
//! or a presentation surface.
//!
//! # Modules
//!
//! - [`currency`]: Catalog records ([`Currency`](currency::Currency),
//!   [`CurrencyCode`](currency::CurrencyCode)), validated [`Amount`](currency::Amount)
//!   and display formatting helpers
//! - [`conversion`]: [`ConversionRequest`](conversion::ConversionRequest) and the
//!   backend's [`ConversionResult`](conversion::ConversionResult)
//! - [`error`]: Error taxonomy ([`ValidationError`](error::ValidationError),
//!   [`ConversionError`](error::ConversionError))
//! - [`rates`]: [`RateRow`](rates::RateRow) and the rate ladder builder
//! - [`settings`]: Persisted user preferences ([`Settings`](settings::Settings),
//!   [`ThemeMode`](settings::ThemeMode), [`Language`](settings::Language))

pub mod conversion;
pub mod currency;
pub mod error;
pub mod rates;
pub mod settings;
