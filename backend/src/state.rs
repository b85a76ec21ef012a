//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The calculator is pure, so the state only carries configuration. It is
//! read-only once the server starts.

use crate::config::{AppConfig, InputLimits};
use std::sync::Arc;

/// Shared application state
///
/// Cloning is O(1): the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the configured form bounds
    #[inline]
    pub fn limits(&self) -> &InputLimits {
        &self.config.limits
    }
}
