use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::photos::handlers;
use crate::features::photos::services::PhotoService;

pub fn routes(service: Arc<PhotoService>) -> Router {
    Router::new()
        .route(
            "/api/orders/{id}/photos",
            get(handlers::list_photos).post(handlers::create_photo),
        )
        .route(
            "/api/orders/{id}/photos/{photo_id}",
            delete(handlers::delete_photo),
        )
        .route(
            "/api/orders/{id}/photos/{photo_id}/export",
            post(handlers::export_photo),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PhotoExportConfig;
    use crate::features::photos::dtos::{DeletePhotoResponseDto, PhotoResponseDto};
    use crate::features::photos::services::PhotoExportService;
    use crate::features::settings::dtos::UpdatePhotoExportSettingsDto;
    use crate::features::settings::SettingsService;
    use crate::modules::kv::MemoryKeyValueStore;
    use crate::shared::test_helpers::{
        create_test_user, local_export_config, seeded_store, spawn_photo_receiver,
        with_authenticated_user,
    };
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> (TestServer, Arc<SettingsService>) {
        server_with(&local_export_config())
    }

    fn server_with(config: &PhotoExportConfig) -> (TestServer, Arc<SettingsService>) {
        let settings = Arc::new(SettingsService::new(Arc::new(MemoryKeyValueStore::new())));
        let exporter = Arc::new(PhotoExportService::new(config).unwrap());
        let service = Arc::new(PhotoService::new(seeded_store(), settings.clone(), exporter));
        let server = TestServer::new(with_authenticated_user(routes(service))).unwrap();
        (server, settings)
    }

    #[tokio::test]
    async fn test_add_and_list_photos() {
        let (server, _) = server();

        let response = server
            .post("/api/orders/1004/photos")
            .json(&json!({ "imageData": "data:image/jpeg;base64,/9j/", "date": "2023-10-25T08:00:00Z" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: ApiResponse<Vec<PhotoResponseDto>> =
            server.get("/api/orders/1004/photos").await.json();
        let photos = body.data.unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].image_data, "data:image/jpeg;base64,/9j/");
        assert_eq!(photos[0].date.to_rfc3339(), "2023-10-25T08:00:00+00:00");
    }

    #[tokio::test]
    async fn test_blank_image_is_rejected() {
        let (server, _) = server();
        server
            .post("/api/orders/1004/photos")
            .json(&json!({ "imageData": "" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_always_succeeds() {
        let (server, _) = server();

        let body: ApiResponse<DeletePhotoResponseDto> =
            server.delete("/api/orders/1001/photos/p2").await.json();
        assert!(body.success);
        assert!(body.data.unwrap().deleted);

        let response = server.delete("/api/orders/1001/photos/p2").await;
        response.assert_status_ok();
        let body: ApiResponse<DeletePhotoResponseDto> = response.json();
        assert!(!body.data.unwrap().deleted);

        let body: Value = server.get("/api/orders/1001/photos").await.json();
        assert_eq!(body["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_export_photo() {
        let (server, settings) = server();

        server
            .post("/api/orders/1003/photos/p3/export")
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let (url, mut received) = spawn_photo_receiver(StatusCode::OK).await;
        settings
            .update_photo_export(
                &create_test_user().sub,
                UpdatePhotoExportSettingsDto {
                    api_endpoint: url,
                    api_key: None,
                    auto_sync: false,
                },
            )
            .await
            .unwrap();

        let response = server.post("/api/orders/1003/photos/p3/export").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["photoId"], "p3");
        assert_eq!(body["data"]["status"], 200);
        assert_eq!(received.recv().await.unwrap().body["orderId"], "1003");
    }

    #[tokio::test]
    async fn test_export_failure_is_bad_gateway() {
        let (server, settings) = server();
        let (url, _received) = spawn_photo_receiver(StatusCode::INTERNAL_SERVER_ERROR).await;
        settings
            .update_photo_export(
                &create_test_user().sub,
                UpdatePhotoExportSettingsDto {
                    api_endpoint: url,
                    api_key: None,
                    auto_sync: false,
                },
            )
            .await
            .unwrap();

        server
            .post("/api/orders/1003/photos/p3/export")
            .await
            .assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_export_to_loopback_endpoint_is_rejected() {
        let (server, settings) = server_with(&PhotoExportConfig::default());
        let (url, mut received) = spawn_photo_receiver(StatusCode::OK).await;
        settings
            .update_photo_export(
                &create_test_user().sub,
                UpdatePhotoExportSettingsDto {
                    api_endpoint: url,
                    api_key: Some("export-key".to_string()),
                    auto_sync: false,
                },
            )
            .await
            .unwrap();

        server
            .post("/api/orders/1003/photos/p3/export")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        assert!(received.try_recv().is_err());
    }
}
