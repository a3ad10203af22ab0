use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::settings::models::PhotoExportSettings;

/// Photo export settings as shown to the client; the API key is masked
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoExportSettingsResponseDto {
    pub api_endpoint: String,
    pub api_key: Option<String>,
    pub auto_sync: bool,
}

impl From<&PhotoExportSettings> for PhotoExportSettingsResponseDto {
    fn from(s: &PhotoExportSettings) -> Self {
        Self {
            api_endpoint: s.api_endpoint.clone(),
            api_key: s.masked_api_key(),
            auto_sync: s.auto_sync,
        }
    }
}

/// Request DTO for saving photo export settings.
///
/// Omitting `apiKey` keeps the stored key; an empty string removes it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhotoExportSettingsDto {
    #[validate(
        url(message = "API endpoint must be a valid URL"),
        custom(function = "crate::shared::validation::http_scheme")
    )]
    pub api_endpoint: String,

    pub api_key: Option<String>,

    #[serde(default)]
    pub auto_sync: bool,
}
