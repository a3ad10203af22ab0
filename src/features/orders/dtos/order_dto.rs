use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::orders::models::{Coordinates, Order, OrderStatus, OrderType};
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationQuery;

/// Response DTO for order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponseDto {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub address: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub description: String,
}

impl From<Order> for OrderResponseDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            client_name: o.client_name,
            client_email: o.client_email,
            client_phone: o.client_phone,
            address: o.address,
            coordinates: o.coordinates,
            order_type: o.order_type,
            status: o.status,
            date: o.date,
            description: o.description,
        }
    }
}

/// Request DTO for updating order status.
///
/// Unknown status values fail deserialization and are answered with 400.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
}

/// Query params for listing orders
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListOrdersQuery {
    /// Free-text search over id, client name, address and type
    pub q: Option<String>,
    /// Only orders with this status
    pub status: Option<OrderStatus>,
    /// Page number (1-indexed, default: 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,
    /// Number of items per page (default: 10, max: 100)
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl ListOrdersQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1).max(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}
