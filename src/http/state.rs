//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::WeightProfile;

/// Shared application state passed to all handlers.
///
/// The weight profile is immutable for the lifetime of the server, so
/// handlers share it through a cheap `Arc` clone.
#[derive(Clone)]
pub struct AppState {
    /// Active weight-profile coefficients
    pub profile: Arc<WeightProfile>,
}

impl AppState {
    /// Create a new application state with the given weight profile.
    pub fn new(profile: WeightProfile) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WeightProfile::default())
    }
}
