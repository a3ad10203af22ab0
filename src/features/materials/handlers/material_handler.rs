use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::materials::dtos::{CreateMaterialDto, MaterialResponseDto};
use crate::features::materials::services::MaterialService;
use crate::shared::types::{ApiResponse, Meta};

/// List materials logged on an order
#[utoipa::path(
    get,
    path = "/api/orders/{id}/materials",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Materials of the order", body = ApiResponse<Vec<MaterialResponseDto>>),
        (status = 404, description = "Order not found")
    ),
    tag = "materials",
    security(("bearer_auth" = []))
)]
pub async fn list_materials(
    State(service): State<Arc<MaterialService>>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<MaterialResponseDto>>>> {
    let materials: Vec<MaterialResponseDto> = service
        .list_by_order(&order_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = materials.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(materials),
        None,
        Some(Meta { total }),
    )))
}

/// Log a material on an order
#[utoipa::path(
    post,
    path = "/api/orders/{id}/materials",
    params(("id" = String, Path, description = "Order id")),
    request_body = CreateMaterialDto,
    responses(
        (status = 201, description = "Material added", body = ApiResponse<MaterialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order not found")
    ),
    tag = "materials",
    security(("bearer_auth" = []))
)]
pub async fn create_material(
    State(service): State<Arc<MaterialService>>,
    Path(order_id): Path<String>,
    AppJson(dto): AppJson<CreateMaterialDto>,
) -> Result<(StatusCode, Json<ApiResponse<MaterialResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let material = service.add(&order_id, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(material.into()), None, None)),
    ))
}
