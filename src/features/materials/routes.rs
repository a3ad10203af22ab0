use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::materials::handlers;
use crate::features::materials::services::MaterialService;

pub fn routes(service: Arc<MaterialService>) -> Router {
    Router::new()
        .route(
            "/api/orders/{id}/materials",
            get(handlers::list_materials).post(handlers::create_material),
        )
        .with_state(service)
}
