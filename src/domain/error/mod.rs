// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Conversion failures fall into three user-visible categories:
//!
//! - **Validation**: bad user input, caught before any backend call
//! - **Business**: the backend answered but declined (`success: false`)
//! - **Transport**: the backend could not be reached or faulted
//!
//! A fourth category, *not found* (unknown currency code), is never an error
//! value: catalog lookups return `Option` and a miss simply hides whatever
//! depended on it.

use thiserror::Error;

/// Broad error family, kept distinct so retry policies can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Business,
    Transport,
}

/// Rejected amount input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount is missing")]
    Missing,
    #[error("amount is not a number")]
    NotNumeric,
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// Terminal failure of a single conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid amount: {0}")]
    Validation(#[from] ValidationError),

    /// Backend declined; carries its message when one was provided.
    #[error("conversion declined: {}", .0.as_deref().unwrap_or("rate unavailable"))]
    Business(Option<String>),

    #[error("backend unreachable: {0}")]
    Transport(String),
}

impl ConversionError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConversionError::Validation(_) => ErrorCategory::Validation,
            ConversionError::Business(_) => ErrorCategory::Business,
            ConversionError::Transport(_) => ErrorCategory::Transport,
        }
    }

    /// Returns the i18n key of the generic message for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ConversionError::Validation(_) => "error.amount",
            ConversionError::Business(_) => "error.api",
            ConversionError::Transport(_) => "error.network",
        }
    }

    /// Backend-provided message, shown instead of the generic text when present.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ConversionError::Business(Some(message)) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_distinct() {
        let validation = ConversionError::from(ValidationError::NotPositive);
        let business = ConversionError::Business(None);
        let transport = ConversionError::Transport("connection refused".into());

        assert_eq!(validation.category(), ErrorCategory::Validation);
        assert_eq!(business.category(), ErrorCategory::Business);
        assert_eq!(transport.category(), ErrorCategory::Transport);
    }

    #[test]
    fn i18n_keys() {
        assert_eq!(
            ConversionError::from(ValidationError::Missing).i18n_key(),
            "error.amount"
        );
        assert_eq!(ConversionError::Business(None).i18n_key(), "error.api");
        assert_eq!(
            ConversionError::Transport(String::new()).i18n_key(),
            "error.network"
        );
    }

    #[test]
    fn backend_message_only_for_business_errors() {
        let declined = ConversionError::Business(Some("currency XYZ not found".into()));
        assert_eq!(declined.backend_message(), Some("currency XYZ not found"));
        assert_eq!(ConversionError::Business(None).backend_message(), None);
        assert_eq!(
            ConversionError::Transport("timeout".into()).backend_message(),
            None
        );
    }

    #[test]
    fn display_falls_back_to_rate_unavailable() {
        let err = ConversionError::Business(None);
        assert_eq!(err.to_string(), "conversion declined: rate unavailable");
    }
}
