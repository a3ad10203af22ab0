use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::time_entries::handlers;
use crate::features::time_entries::services::TimeEntryService;

pub fn routes(service: Arc<TimeEntryService>) -> Router {
    Router::new()
        .route(
            "/api/orders/{id}/time-entries",
            get(handlers::list_time_entries).post(handlers::create_time_entry),
        )
        .route(
            "/api/orders/{id}/time-entries/total",
            get(handlers::get_total_hours),
        )
        .with_state(service)
}
