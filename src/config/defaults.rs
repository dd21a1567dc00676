// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: Service location and request timeout
//! - **Converter**: Initial pair, amount and ladder multipliers

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base URL of the conversion service.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

/// Timeout applied to every backend request (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Converter Defaults
// ==========================================================================

/// Source currency selected at startup.
pub const DEFAULT_FROM_CODE: &str = "USD";

/// Target currency selected at startup.
pub const DEFAULT_TO_CODE: &str = "RUB";

/// Amount in the input field at startup.
pub const DEFAULT_AMOUNT: &str = "1";

/// Multipliers of the rate ladder, in display order.
pub const DEFAULT_LADDER_MULTIPLIERS: [u32; 4] = [1, 10, 100, 1000];

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Interval between notification expiry checks (in milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MAX_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);

    assert!(!DEFAULT_LADDER_MULTIPLIERS.is_empty());
    let mut i = 0;
    while i < DEFAULT_LADDER_MULTIPLIERS.len() {
        assert!(DEFAULT_LADDER_MULTIPLIERS[i] > 0);
        i += 1;
    }

    assert!(NOTIFICATION_TICK_MS > 0);
};
