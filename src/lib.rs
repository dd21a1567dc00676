// SPDX-License-Identifier: MPL-2.0
//! `skyventor` is a localized currency converter client.
//!
//! It keeps the presentation state of the converter, drives single-flight
//! conversion requests against a JSON backend, derives rate ladders, and
//! resolves user-facing text and themes from persisted preferences.

#![doc(html_root_url = "https://docs.rs/skyventor/0.2.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
