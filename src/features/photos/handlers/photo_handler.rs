use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::photos::dtos::{
    CreatePhotoDto, DeletePhotoResponseDto, PhotoExportResultDto, PhotoResponseDto,
};
use crate::features::photos::services::PhotoService;
use crate::shared::types::{ApiResponse, Meta};

/// List photos of an order
#[utoipa::path(
    get,
    path = "/api/orders/{id}/photos",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Photos of the order", body = ApiResponse<Vec<PhotoResponseDto>>),
        (status = 404, description = "Order not found")
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn list_photos(
    State(service): State<Arc<PhotoService>>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<PhotoResponseDto>>>> {
    let photos: Vec<PhotoResponseDto> = service
        .list_by_order(&order_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = photos.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(photos),
        None,
        Some(Meta { total }),
    )))
}

/// Attach a photo to an order
///
/// When the user has automatic sync on, the photo is also pushed to their
/// export endpoint in the background.
#[utoipa::path(
    post,
    path = "/api/orders/{id}/photos",
    params(("id" = String, Path, description = "Order id")),
    request_body = CreatePhotoDto,
    responses(
        (status = 201, description = "Photo added", body = ApiResponse<PhotoResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order not found")
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn create_photo(
    user: AuthenticatedUser,
    State(service): State<Arc<PhotoService>>,
    Path(order_id): Path<String>,
    AppJson(dto): AppJson<CreatePhotoDto>,
) -> Result<(StatusCode, Json<ApiResponse<PhotoResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let photo = service.add(&user.sub, &order_id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(photo.into()), None, None)),
    ))
}

/// Delete a photo
///
/// Always succeeds; `deleted` is false when the photo did not exist.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}/photos/{photo_id}",
    params(
        ("id" = String, Path, description = "Order id"),
        ("photo_id" = String, Path, description = "Photo id")
    ),
    responses(
        (status = 200, description = "Delete processed", body = ApiResponse<DeletePhotoResponseDto>)
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn delete_photo(
    State(service): State<Arc<PhotoService>>,
    Path((order_id, photo_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<DeletePhotoResponseDto>>> {
    let deleted = service.delete(&order_id, &photo_id).await;
    Ok(Json(ApiResponse::success(
        Some(DeletePhotoResponseDto { deleted }),
        None,
        None,
    )))
}

/// Push a photo to the user's export endpoint
#[utoipa::path(
    post,
    path = "/api/orders/{id}/photos/{photo_id}/export",
    params(
        ("id" = String, Path, description = "Order id"),
        ("photo_id" = String, Path, description = "Photo id")
    ),
    responses(
        (status = 200, description = "Photo exported", body = ApiResponse<PhotoExportResultDto>),
        (status = 400, description = "Export endpoint not configured"),
        (status = 404, description = "Photo not found"),
        (status = 502, description = "Export endpoint failed")
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn export_photo(
    user: AuthenticatedUser,
    State(service): State<Arc<PhotoService>>,
    Path((order_id, photo_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<PhotoExportResultDto>>> {
    let result = service.export(&user.sub, &order_id, &photo_id).await?;
    Ok(Json(ApiResponse::success(
        Some(result),
        Some("Photo exported".to_string()),
        None,
    )))
}
