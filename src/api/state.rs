//! Application state for the babysitter pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, FamilyRegistry};

/// Shared application state.
///
/// Holds the read-only family registry shared by every request.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<FamilyRegistry>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self::from_registry(config.into_registry())
    }

    /// Creates a new application state from a family registry.
    pub fn from_registry(registry: FamilyRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the family registry.
    pub fn registry(&self) -> &FamilyRegistry {
        &self.registry
    }
}
