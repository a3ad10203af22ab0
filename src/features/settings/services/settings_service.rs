use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::core::error::{AppError, Result};
use crate::features::settings::dtos::UpdatePhotoExportSettingsDto;
use crate::features::settings::models::{PhotoExportSettings, Preferences};
use crate::modules::kv::KeyValueStore;
use crate::shared::constants::{PHOTO_EXPORT_KEY_PREFIX, PREFERENCES_KEY_PREFIX};

/// Per-user settings kept in the key-value store, keyed by `<prefix>:<user>`
pub struct SettingsService {
    kv: Arc<dyn KeyValueStore>,
}

impl SettingsService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    fn key(prefix: &str, user_id: &str) -> String {
        format!("{}:{}", prefix, user_id)
    }

    /// Load a settings document, falling back to its default when absent
    /// or unreadable
    async fn load<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let value = self
            .kv
            .get(key)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read settings: {}", e)))?;

        match value {
            Some(value) => Ok(serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable settings {}: {}", key, e);
                T::default()
            })),
            None => Ok(T::default()),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, settings: &T) -> Result<()> {
        let value = serde_json::to_value(settings)
            .map_err(|e| AppError::Internal(format!("Failed to encode settings: {}", e)))?;

        self.kv
            .set(key, value)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to save settings: {}", e)))
    }

    pub async fn get_preferences(&self, user_id: &str) -> Result<Preferences> {
        self.load(&Self::key(PREFERENCES_KEY_PREFIX, user_id)).await
    }

    pub async fn update_preferences(
        &self,
        user_id: &str,
        preferences: Preferences,
    ) -> Result<Preferences> {
        self.save(&Self::key(PREFERENCES_KEY_PREFIX, user_id), &preferences)
            .await?;

        tracing::info!(
            "Preferences saved: user={}, language={:?}, theme={:?}",
            user_id,
            preferences.language,
            preferences.theme
        );

        Ok(preferences)
    }

    /// Forget a settings document so later reads return its default
    async fn reset(&self, key: &str) -> Result<bool> {
        self.kv
            .remove(key)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to reset settings: {}", e)))
    }

    pub async fn reset_preferences(&self, user_id: &str) -> Result<Preferences> {
        let existed = self
            .reset(&Self::key(PREFERENCES_KEY_PREFIX, user_id))
            .await?;
        tracing::info!("Preferences reset: user={}, existed={}", user_id, existed);
        Ok(Preferences::default())
    }

    /// Stored photo export settings, API key in clear
    pub async fn get_photo_export(&self, user_id: &str) -> Result<PhotoExportSettings> {
        self.load(&Self::key(PHOTO_EXPORT_KEY_PREFIX, user_id)).await
    }

    pub async fn update_photo_export(
        &self,
        user_id: &str,
        dto: UpdatePhotoExportSettingsDto,
    ) -> Result<PhotoExportSettings> {
        let current = self.get_photo_export(user_id).await?;

        let api_key = match dto.api_key {
            None => current.api_key,
            Some(key) if key.trim().is_empty() => None,
            Some(key) => Some(key.trim().to_string()),
        };

        let settings = PhotoExportSettings {
            api_endpoint: dto.api_endpoint.trim().to_string(),
            api_key,
            auto_sync: dto.auto_sync,
        };

        self.save(&Self::key(PHOTO_EXPORT_KEY_PREFIX, user_id), &settings)
            .await?;

        tracing::info!(
            "Photo export settings saved: user={}, endpoint={}, auto_sync={}",
            user_id,
            settings.api_endpoint,
            settings.auto_sync
        );

        Ok(settings)
    }

    pub async fn reset_photo_export(&self, user_id: &str) -> Result<PhotoExportSettings> {
        let existed = self
            .reset(&Self::key(PHOTO_EXPORT_KEY_PREFIX, user_id))
            .await?;
        tracing::info!(
            "Photo export settings reset: user={}, existed={}",
            user_id,
            existed
        );
        Ok(PhotoExportSettings::default())
    }
}
