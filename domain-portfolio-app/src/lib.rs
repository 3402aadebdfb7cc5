//! Platform-agnostic application bootstrap for Domain Portfolio.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter
//! injection). Frontends pick a storage adapter from [`adapters`] and build
//! the state once at startup.

pub mod adapters;

use std::sync::Arc;

use domain_portfolio_core::console::ConsoleSession;
use domain_portfolio_core::error::{CoreError, CoreResult};
use domain_portfolio_core::services::{
    AuthService, DomainService, ServiceContext, SettingsService,
};
use domain_portfolio_core::traits::{DomainRepository, KeyValueStore, SettingsRepository};
use domain_portfolio_core::types::{DomainFilter, DomainRecord, ListQuery, SortSpec};
use domain_portfolio_core::KeyValueRepository;
use tokio::sync::Mutex;

/// Result of running a console command
#[derive(Debug, Clone)]
pub struct ConsoleOutcome {
    /// Filter in effect after the command
    pub filter: DomainFilter,
    /// Domains matching that filter
    pub domains: Vec<DomainRecord>,
}

/// Platform-agnostic application state.
///
/// Holds all services. Every frontend constructs this once at startup via
/// `AppStateBuilder`.
pub struct AppState {
    /// Domain collection service
    pub domain_service: DomainService,
    /// Site settings service
    pub settings_service: SettingsService,
    /// Admin password check
    pub auth_service: AuthService,
    /// Shared command console (history and active filter)
    pub console: Mutex<ConsoleSession>,
}

impl AppState {
    /// Run a console command and list the domains under the resulting filter.
    pub async fn run_console_command(
        &self,
        command: &str,
        sort: SortSpec,
    ) -> CoreResult<ConsoleOutcome> {
        let filter = self.console.lock().await.submit(command).clone();
        let domains = self
            .domain_service
            .list(&ListQuery {
                filter: filter.clone(),
                sort,
            })
            .await?;
        Ok(ConsoleOutcome { filter, domains })
    }

    /// Console history, oldest first
    pub async fn console_history(&self) -> Vec<String> {
        self.console.lock().await.history().entries().to_vec()
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Storage
/// Either a `key_value_store` (both repositories are layered on top of it),
/// or a `domain_repository` plus `settings_repository`. Explicit repositories
/// take precedence.
///
/// # Optional
/// - `admin_password`: without it every login fails with `AuthNotConfigured`
pub struct AppStateBuilder {
    key_value_store: Option<Arc<dyn KeyValueStore>>,
    domain_repository: Option<Arc<dyn DomainRepository>>,
    settings_repository: Option<Arc<dyn SettingsRepository>>,
    admin_password: Option<String>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_value_store: None,
            domain_repository: None,
            settings_repository: None,
            admin_password: None,
        }
    }

    #[must_use]
    pub fn key_value_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.key_value_store = Some(store);
        self
    }

    #[must_use]
    pub fn domain_repository(mut self, repo: Arc<dyn DomainRepository>) -> Self {
        self.domain_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn settings_repository(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn admin_password(mut self, password: Option<String>) -> Self {
        self.admin_password = password;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if no storage was provided.
    pub fn build(self) -> CoreResult<AppState> {
        let shared = self
            .key_value_store
            .map(|store| Arc::new(KeyValueRepository::new(store)));

        let domain_repository = self
            .domain_repository
            .or_else(|| {
                shared
                    .clone()
                    .map(|repo| repo as Arc<dyn DomainRepository>)
            })
            .ok_or_else(|| {
                CoreError::ValidationError(
                    "key_value_store or domain_repository is required".to_string(),
                )
            })?;
        let settings_repository = self
            .settings_repository
            .or_else(|| shared.map(|repo| repo as Arc<dyn SettingsRepository>))
            .ok_or_else(|| {
                CoreError::ValidationError(
                    "key_value_store or settings_repository is required".to_string(),
                )
            })?;

        let ctx = ServiceContext::new(domain_repository, settings_repository);
        let domain_service = DomainService::new(ctx.domain_repository);
        let settings_service = SettingsService::new(ctx.settings_repository);
        let auth_service = AuthService::new(self.admin_password);
        if !auth_service.is_configured() {
            log::warn!("No admin password configured, write access is disabled");
        }

        Ok(AppState {
            domain_service,
            settings_service,
            auth_service,
            console: Mutex::new(ConsoleSession::new()),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
