use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::settings::dtos::{
    PhotoExportSettingsResponseDto, UpdatePhotoExportSettingsDto,
};
use crate::features::settings::models::Preferences;
use crate::features::settings::services::SettingsService;
use crate::shared::types::ApiResponse;

/// Get the current user's preferences
#[utoipa::path(
    get,
    path = "/api/settings/preferences",
    responses(
        (status = 200, description = "Preferences, defaults when never saved", body = ApiResponse<Preferences>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings",
    security(("bearer_auth" = []))
)]
pub async fn get_preferences(
    user: AuthenticatedUser,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<Preferences>>> {
    let preferences = service.get_preferences(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(preferences), None, None)))
}

/// Save the current user's preferences
#[utoipa::path(
    put,
    path = "/api/settings/preferences",
    request_body = Preferences,
    responses(
        (status = 200, description = "Preferences saved", body = ApiResponse<Preferences>),
        (status = 400, description = "Unknown language or theme")
    ),
    tag = "settings",
    security(("bearer_auth" = []))
)]
pub async fn update_preferences(
    user: AuthenticatedUser,
    State(service): State<Arc<SettingsService>>,
    AppJson(preferences): AppJson<Preferences>,
) -> Result<Json<ApiResponse<Preferences>>> {
    let preferences = service.update_preferences(&user.sub, preferences).await?;
    Ok(Json(ApiResponse::success(
        Some(preferences),
        Some("Preferences saved".to_string()),
        None,
    )))
}

/// Reset the current user's preferences to their defaults
#[utoipa::path(
    delete,
    path = "/api/settings/preferences",
    responses(
        (status = 200, description = "Preferences reset", body = ApiResponse<Preferences>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings",
    security(("bearer_auth" = []))
)]
pub async fn reset_preferences(
    user: AuthenticatedUser,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<Preferences>>> {
    let preferences = service.reset_preferences(&user.sub).await?;
    Ok(Json(ApiResponse::success(
        Some(preferences),
        Some("Preferences reset".to_string()),
        None,
    )))
}

/// Get the current user's photo export settings
#[utoipa::path(
    get,
    path = "/api/settings/photo-export",
    responses(
        (status = 200, description = "Photo export settings with masked API key", body = ApiResponse<PhotoExportSettingsResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings",
    security(("bearer_auth" = []))
)]
pub async fn get_photo_export_settings(
    user: AuthenticatedUser,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<PhotoExportSettingsResponseDto>>> {
    let settings = service.get_photo_export(&user.sub).await?;
    Ok(Json(ApiResponse::success(
        Some((&settings).into()),
        None,
        None,
    )))
}

/// Save the current user's photo export settings
#[utoipa::path(
    put,
    path = "/api/settings/photo-export",
    request_body = UpdatePhotoExportSettingsDto,
    responses(
        (status = 200, description = "Settings saved", body = ApiResponse<PhotoExportSettingsResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "settings",
    security(("bearer_auth" = []))
)]
pub async fn update_photo_export_settings(
    user: AuthenticatedUser,
    State(service): State<Arc<SettingsService>>,
    AppJson(dto): AppJson<UpdatePhotoExportSettingsDto>,
) -> Result<Json<ApiResponse<PhotoExportSettingsResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let settings = service.update_photo_export(&user.sub, dto).await?;
    Ok(Json(ApiResponse::success(
        Some((&settings).into()),
        Some("Photo export settings saved".to_string()),
        None,
    )))
}

/// Remove the current user's photo export settings, API key included
#[utoipa::path(
    delete,
    path = "/api/settings/photo-export",
    responses(
        (status = 200, description = "Settings reset", body = ApiResponse<PhotoExportSettingsResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings",
    security(("bearer_auth" = []))
)]
pub async fn reset_photo_export_settings(
    user: AuthenticatedUser,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<PhotoExportSettingsResponseDto>>> {
    let settings = service.reset_photo_export(&user.sub).await?;
    Ok(Json(ApiResponse::success(
        Some((&settings).into()),
        Some("Photo export settings reset".to_string()),
        None,
    )))
}
