// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Conversion service over HTTP plus local settings storage
//!   (implements [`Backend`])
//!
//! [`Backend`]: crate::application::port::Backend

pub mod http;

pub use http::HttpBackend;
