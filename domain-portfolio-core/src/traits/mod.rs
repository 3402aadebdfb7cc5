//! Storage layer abstraction trait definition

mod domain_repository;
mod key_value_store;
mod settings_repository;

pub use domain_repository::DomainRepository;
pub use key_value_store::{keys, KeyValueStore};
pub use settings_repository::SettingsRepository;
