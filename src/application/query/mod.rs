// SPDX-License-Identifier: MPL-2.0
//! Query services over data fetched from the backend.

pub mod catalog;

pub use catalog::CurrencyCatalog;
