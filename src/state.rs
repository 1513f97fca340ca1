//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream clients behind trait objects so route tests can swap in
//! mocks. Everything inside is read-only after startup.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::identity::{IdentityClient, IdentityError, TokenSource};
use crate::services::occurrence::{OccurrenceClient, OccurrenceError, OccurrenceSource};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Occurrence(#[from] OccurrenceError),
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn TokenSource>,
    pub occurrences: Arc<dyn OccurrenceSource>,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Arc<dyn TokenSource>, occurrences: Arc<dyn OccurrenceSource>) -> Self {
        Self { identity, occurrences }
    }

    /// Build the real upstream clients from config.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, StateError> {
        let identity = IdentityClient::new(config.identity.clone())?;
        let occurrences = OccurrenceClient::new(config.occurrences.clone())?;
        Ok(Self::new(Arc::new(identity), Arc::new(occurrences)))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
