//! Domain Portfolio Core Library
//!
//! Provides the core business logic of the portfolio dashboard, including:
//! - Domain list processing (filtering and multi-key sorting)
//! - The `domain-list` command console (parser, history, completion)
//! - Domain, settings and auth services
//!
//! This library is platform-independent: persistence is abstracted behind the
//! `KeyValueStore` trait, and frontends inject their own store implementation.

pub mod console;
pub mod error;
pub mod listing;
pub mod repository;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use repository::KeyValueRepository;
pub use services::{AuthService, DomainService, ServiceContext, SettingsService};
pub use traits::{DomainRepository, KeyValueStore, SettingsRepository};
