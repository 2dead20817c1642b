//! The Mergington backend: an axum service exposing the activity catalog and
//! the signup/unregister operations on its rosters.

use std::sync::Arc;

use crate::services::{ActivityCatalog, RosterServiceInMemory};

pub mod config;
pub mod handlers;
pub mod routes;
pub mod services;

/// State shared by every request handler.
///
/// The catalog is built once here and handed to the handlers through axum's
/// `State`; nothing tears it down.
pub struct AppState {
    pub catalog: Arc<ActivityCatalog>,
    pub roster: RosterServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn with_catalog(catalog: ActivityCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            roster: RosterServiceInMemory::new(catalog.clone()),
            catalog,
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(ActivityCatalog::seeded())
    }
}
