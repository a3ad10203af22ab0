use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::orders::dtos::{ListOrdersQuery, OrderResponseDto, UpdateOrderStatusDto};
use crate::features::orders::services::OrderService;
use crate::shared::types::{ApiResponse, Meta};

/// List orders
///
/// `q` matches order id, client name, address and order type (case-insensitive).
/// `meta.total` is the number of matches before paging.
#[utoipa::path(
    get,
    path = "/api/orders",
    params(ListOrdersQuery),
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<OrderResponseDto>>),
        (status = 400, description = "Invalid query"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "orders",
    security(("bearer_auth" = []))
)]
pub async fn list_orders(
    State(service): State<Arc<OrderService>>,
    AppQuery(query): AppQuery<ListOrdersQuery>,
) -> Result<Json<ApiResponse<Vec<OrderResponseDto>>>> {
    let orders = service.list(query.q.as_deref(), query.status).await;
    let total = orders.len() as i64;

    let items = query
        .pagination()
        .apply(orders)
        .into_iter()
        .map(OrderResponseDto::from)
        .collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get order by id
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = ApiResponse<OrderResponseDto>),
        (status = 404, description = "Order not found")
    ),
    tag = "orders",
    security(("bearer_auth" = []))
)]
pub async fn get_order(
    State(service): State<Arc<OrderService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<OrderResponseDto>>> {
    let order = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(Some(order.into()), None, None)))
}

/// Change order status
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(("id" = String, Path, description = "Order id")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OrderResponseDto>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Order not found")
    ),
    tag = "orders",
    security(("bearer_auth" = []))
)]
pub async fn update_order_status(
    State(service): State<Arc<OrderService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateOrderStatusDto>,
) -> Result<Json<ApiResponse<OrderResponseDto>>> {
    let order = service.update_status(&id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(order.into()),
        Some("Order status updated".to_string()),
        None,
    )))
}
