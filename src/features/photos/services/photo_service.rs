use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::photos::dtos::{CreatePhotoDto, PhotoExportResultDto};
use crate::features::photos::models::{NewOrderPhoto, OrderPhoto};
use crate::features::photos::services::PhotoExportService;
use crate::features::settings::SettingsService;
use crate::modules::store::SharedStore;

pub struct PhotoService {
    store: SharedStore,
    settings: Arc<SettingsService>,
    exporter: Arc<PhotoExportService>,
}

impl PhotoService {
    pub fn new(
        store: SharedStore,
        settings: Arc<SettingsService>,
        exporter: Arc<PhotoExportService>,
    ) -> Self {
        Self {
            store,
            settings,
            exporter,
        }
    }

    pub async fn list_by_order(&self, order_id: &str) -> Result<Vec<OrderPhoto>> {
        let store = self.store.read().await;

        if !store.contains_order(order_id) {
            return Err(AppError::NotFound(format!("Order '{}' not found", order_id)));
        }

        Ok(store.photos_by_order(order_id))
    }

    /// Attach a photo, then export it in the background if the user has
    /// automatic sync enabled
    pub async fn add(
        &self,
        user_id: &str,
        order_id: &str,
        dto: CreatePhotoDto,
    ) -> Result<OrderPhoto> {
        let photo = self.store.write().await.add_photo(NewOrderPhoto {
            order_id: order_id.to_string(),
            image_data: dto.image_data,
            date: dto.date.unwrap_or_else(Utc::now),
        })?;

        tracing::info!(
            "Photo added: id={}, order={}, bytes={}",
            photo.id,
            photo.order_id,
            photo.image_data.len()
        );

        self.spawn_auto_export(user_id, &photo).await;

        Ok(photo)
    }

    async fn spawn_auto_export(&self, user_id: &str, photo: &OrderPhoto) {
        let settings = match self.settings.get_photo_export(user_id).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Skipping auto export of photo {}: {}", photo.id, e);
                return;
            }
        };

        if !settings.auto_sync || !settings.is_configured() {
            return;
        }

        let exporter = self.exporter.clone();
        let photo = photo.clone();
        tokio::spawn(async move {
            if let Err(e) = exporter.export(&settings, &photo).await {
                tracing::warn!("Auto export of photo {} failed: {}", photo.id, e);
            }
        });
    }

    /// Export one photo of an order with the user's settings
    pub async fn export(
        &self,
        user_id: &str,
        order_id: &str,
        photo_id: &str,
    ) -> Result<PhotoExportResultDto> {
        let photo = self
            .store
            .read()
            .await
            .photo_by_id(photo_id)
            .filter(|p| p.order_id == order_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Photo '{}' not found on order '{}'",
                    photo_id, order_id
                ))
            })?;

        let settings = self.settings.get_photo_export(user_id).await?;
        self.exporter.export(&settings, &photo).await
    }

    /// Remove a photo from an order. Returns whether anything was removed.
    pub async fn delete(&self, order_id: &str, photo_id: &str) -> bool {
        let mut store = self.store.write().await;

        let belongs_to_order = store
            .photo_by_id(photo_id)
            .is_some_and(|p| p.order_id == order_id);
        if !belongs_to_order {
            tracing::debug!(
                "Nothing to delete: photo {} on order {}",
                photo_id,
                order_id
            );
            return false;
        }

        let deleted = store.delete_photo(photo_id);
        tracing::info!("Photo deleted: id={}, order={}", photo_id, order_id);
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::dtos::UpdatePhotoExportSettingsDto;
    use crate::modules::kv::MemoryKeyValueStore;
    use crate::shared::test_helpers::{local_export_config, seeded_store, spawn_photo_receiver};
    use axum::http::StatusCode;
    use std::time::Duration;

    const USER: &str = "tekniker@sanering.se";

    fn service() -> (PhotoService, Arc<SettingsService>) {
        let settings = Arc::new(SettingsService::new(Arc::new(MemoryKeyValueStore::new())));
        let exporter = Arc::new(
            PhotoExportService::new(&local_export_config()).unwrap(),
        );
        (
            PhotoService::new(seeded_store(), settings.clone(), exporter),
            settings,
        )
    }

    fn new_photo() -> CreatePhotoDto {
        CreatePhotoDto {
            image_data: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            date: None,
        }
    }

    #[tokio::test]
    async fn test_delete_photo() {
        let (service, _) = service();

        assert!(service.delete("1001", "p2").await);
        let ids: Vec<_> = service
            .list_by_order("1001")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1"]);

        assert!(!service.delete("1001", "p2").await);
        assert!(!service.delete("1001", "nope").await);
        // p3 belongs to 1003
        assert!(!service.delete("1001", "p3").await);
        assert_eq!(service.list_by_order("1003").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_defaults_date_to_now() {
        let (service, _) = service();
        let before = Utc::now();

        let photo = service.add(USER, "1004", new_photo()).await.unwrap();

        assert_eq!(photo.id, "p4");
        assert!(photo.date >= before);
    }

    #[tokio::test]
    async fn test_auto_sync_exports_new_photo() {
        let (service, settings) = service();
        let (url, mut received) = spawn_photo_receiver(StatusCode::OK).await;
        settings
            .update_photo_export(
                USER,
                UpdatePhotoExportSettingsDto {
                    api_endpoint: url,
                    api_key: Some("k".to_string()),
                    auto_sync: true,
                },
            )
            .await
            .unwrap();

        let photo = service.add(USER, "1002", new_photo()).await.unwrap();

        let request = tokio::time::timeout(Duration::from_secs(5), received.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(request.body["photoId"], photo.id.as_str());
        assert_eq!(request.body["orderId"], "1002");
    }

    #[tokio::test]
    async fn test_export_requires_photo_on_order_and_endpoint() {
        let (service, _) = service();

        assert!(matches!(
            service.export(USER, "1003", "p1").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.export(USER, "1001", "p1").await,
            Err(AppError::BadRequest(_))
        ));
    }
}
