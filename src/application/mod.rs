// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and read-side services.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (session caches over backend data)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui`, `app`) uses application layer services

pub mod port;
pub mod query;
