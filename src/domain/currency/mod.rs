// SPDX-License-Identifier: MPL-2.0
//! Currency domain types.

mod amount;
mod format;
mod types;

pub use amount::Amount;
pub use format::{format_fixed, unit_rate_text};
pub use types::{Currency, CurrencyCode, CurrencyKind};
