//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration, and session signing key.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use warbler_common::AppConfig;
use warbler_service::ServiceContext;

use crate::session::session_key;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Key used to sign session cookies
    key: Key,
}

impl AppState {
    /// Create a new AppState
    ///
    /// The session signing key is derived from the configured secret.
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let key = session_key(&config.session.secret);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            key,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
