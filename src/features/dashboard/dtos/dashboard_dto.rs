use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::orders::dtos::OrderResponseDto;

/// Order counts and the latest orders for the dashboard header
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_orders: usize,
    pub pending_count: usize,
    pub in_progress_count: usize,
    pub completed_count: usize,
    pub cancelled_count: usize,
    pub recent_orders: Vec<OrderResponseDto>,
}
