use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::time_entries::dtos::{
    CreateTimeEntryDto, TimeEntryResponseDto, TotalHoursDto,
};
use crate::features::time_entries::services::TimeEntryService;
use crate::shared::types::{ApiResponse, Meta};

/// List time entries of an order
#[utoipa::path(
    get,
    path = "/api/orders/{id}/time-entries",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Time entries of the order", body = ApiResponse<Vec<TimeEntryResponseDto>>),
        (status = 404, description = "Order not found")
    ),
    tag = "time-entries",
    security(("bearer_auth" = []))
)]
pub async fn list_time_entries(
    State(service): State<Arc<TimeEntryService>>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<TimeEntryResponseDto>>>> {
    let entries: Vec<TimeEntryResponseDto> = service
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

/// Summed hours of an order
#[utoipa::path(
    get,
    path = "/api/orders/{id}/time-entries/total",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Total hours", body = ApiResponse<TotalHoursDto>),
        (status = 404, description = "Order not found")
    ),
    tag = "time-entries",
    security(("bearer_auth" = []))
)]
pub async fn get_total_hours(
    State(service): State<Arc<TimeEntryService>>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<TotalHoursDto>>> {
    let total = service.total_hours(&order_id).await?;
    Ok(Json(ApiResponse::success(Some(total), None, None)))
}

/// Log hours on an order
#[utoipa::path(
    post,
    path = "/api/orders/{id}/time-entries",
    params(("id" = String, Path, description = "Order id")),
    request_body = CreateTimeEntryDto,
    responses(
        (status = 201, description = "Time entry added", body = ApiResponse<TimeEntryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order not found")
    ),
    tag = "time-entries",
    security(("bearer_auth" = []))
)]
pub async fn create_time_entry(
    State(service): State<Arc<TimeEntryService>>,
    Path(order_id): Path<String>,
    AppJson(dto): AppJson<CreateTimeEntryDto>,
) -> Result<(StatusCode, Json<ApiResponse<TimeEntryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = service.add(&order_id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(entry.into()), None, None)),
    ))
}
