use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::settings::handlers;
use crate::features::settings::services::SettingsService;

/// Create routes for the settings feature
///
/// Note: All routes require authentication; settings are per user
pub fn routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route(
            "/api/settings/preferences",
            get(handlers::get_preferences)
                .put(handlers::update_preferences)
                .delete(handlers::reset_preferences),
        )
        .route(
            "/api/settings/photo-export",
            get(handlers::get_photo_export_settings)
                .put(handlers::update_photo_export_settings)
                .delete(handlers::reset_photo_export_settings),
        )
        .with_state(service)
}
