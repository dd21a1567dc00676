// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, accepts a `Message` through `handle`, and answers with
//! an `Effect` that the application turns into backend requests or toasts.
//!
//! # Screens
//!
//! - [`converter`] - Amount entry, single-flight conversion and result display
//! - [`rates`] - Server-side rate ladder for a selected pair
//!
//! # Shared Infrastructure
//!
//! - [`theming`] - Dark/Light/Auto theme resolution
//! - [`notifications`] - Toast notification system for user feedback

pub mod converter;
pub mod notifications;
pub mod rates;
pub mod theming;
