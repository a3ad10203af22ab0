use crate::core::error::Result;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::orders::models::OrderStatus;
use crate::modules::store::SharedStore;
use crate::shared::constants::RECENT_ORDERS_LIMIT;

/// Service for dashboard queries
pub struct DashboardService {
    store: SharedStore,
}

impl DashboardService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Counts per status plus the first orders of the list
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let store = self.store.read().await;
        let summary = store.order_summary();

        let recent_orders = store
            .orders()
            .into_iter()
            .take(RECENT_ORDERS_LIMIT)
            .map(Into::into)
            .collect();

        tracing::debug!("Dashboard summary: {} orders", summary.total);

        Ok(DashboardSummaryDto {
            total_orders: summary.total,
            pending_count: summary.count(OrderStatus::Pending),
            in_progress_count: summary.count(OrderStatus::InProgress),
            completed_count: summary.count(OrderStatus::Completed),
            cancelled_count: summary.count(OrderStatus::Cancelled),
            recent_orders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::OrderStore;
    use crate::shared::test_helpers::seeded_store;

    #[tokio::test]
    async fn test_summary_of_demo_data() {
        let summary = DashboardService::new(seeded_store())
            .get_summary()
            .await
            .unwrap();

        assert_eq!(summary.total_orders, 5);
        assert_eq!(summary.pending_count, 2);
        assert_eq!(summary.in_progress_count, 2);
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.cancelled_count, 0);

        let recent: Vec<_> = summary.recent_orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(recent, vec!["1001", "1002", "1003"]);
    }

    #[tokio::test]
    async fn test_summary_tracks_status_changes() {
        let store = seeded_store();
        store
            .write()
            .await
            .update_order_status("1002", OrderStatus::Cancelled);

        let summary = DashboardService::new(store).get_summary().await.unwrap();
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.cancelled_count, 1);
    }

    #[tokio::test]
    async fn test_summary_of_empty_store() {
        let summary = DashboardService::new(OrderStore::new().into_shared())
            .get_summary()
            .await
            .unwrap();

        assert_eq!(summary.total_orders, 0);
        assert!(summary.recent_orders.is_empty());
    }
}
