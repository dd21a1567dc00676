// SPDX-License-Identifier: MPL-2.0
//! Validated conversion amount.

use crate::domain::error::ValidationError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Amount to convert, guaranteed to be strictly positive.
///
/// This is the entry guard of a conversion attempt: anything that cannot be
/// turned into an `Amount` never reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Wraps a decimal, rejecting zero and negative values.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ValidationError::NotPositive)
        }
    }

    /// Parses raw user input.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing);
        }
        let value = Decimal::from_str(trimmed).map_err(|_| ValidationError::NotNumeric)?;
        Self::new(value)
    }

    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
