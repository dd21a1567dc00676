// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete transports.
//!
//! # Available Ports
//!
//! - [`backend`]: Settings, currency catalog, conversion and rate ladder operations
//!
//! # Design Notes
//!
//! - Traits use domain types only (no HTTP types, no file paths)
//! - Traits are `Send + Sync` so one instance can be shared by the runtime
//! - Methods are `async` (via `async-trait`) and return `Result` with
//!   [`BackendError`] for transport faults only
//!
//! # Example
//!
//! ```ignore
//! use skyventor::application::port::Backend;
//!
//! async fn codes(backend: &dyn Backend) -> Vec<String> {
//!     backend
//!         .list_currencies()
//!         .await
//!         .map(|list| list.into_iter().map(|c| c.code.to_string()).collect())
//!         .unwrap_or_default()
//! }
//! ```

pub mod backend;

pub use backend::{Backend, BackendError};
