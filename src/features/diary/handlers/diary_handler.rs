use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::diary::dtos::{CreateDiaryEntryDto, DiaryEntryResponseDto};
use crate::features::diary::services::DiaryService;
use crate::shared::types::{ApiResponse, Meta};

/// List work diary entries of an order
#[utoipa::path(
    get,
    path = "/api/orders/{id}/diary-entries",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Diary entries of the order", body = ApiResponse<Vec<DiaryEntryResponseDto>>),
        (status = 404, description = "Order not found")
    ),
    tag = "diary",
    security(("bearer_auth" = []))
)]
pub async fn list_diary_entries(
    State(service): State<Arc<DiaryService>>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<DiaryEntryResponseDto>>>> {
    let entries: Vec<DiaryEntryResponseDto> = service
        .list_by_order(&order_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = entries.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(entries),
        None,
        Some(Meta { total }),
    )))
}

/// Write a diary entry
#[utoipa::path(
    post,
    path = "/api/orders/{id}/diary-entries",
    params(("id" = String, Path, description = "Order id")),
    request_body = CreateDiaryEntryDto,
    responses(
        (status = 201, description = "Diary entry added", body = ApiResponse<DiaryEntryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order not found")
    ),
    tag = "diary",
    security(("bearer_auth" = []))
)]
pub async fn create_diary_entry(
    State(service): State<Arc<DiaryService>>,
    Path(order_id): Path<String>,
    AppJson(dto): AppJson<CreateDiaryEntryDto>,
) -> Result<(StatusCode, Json<ApiResponse<DiaryEntryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = service.add(&order_id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(entry.into()), None, None)),
    ))
}
