use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::orders::handlers;
use crate::features::orders::services::OrderService;

/// Create routes for the orders feature
///
/// Note: All routes require authentication
pub fn routes(service: Arc<OrderService>) -> Router {
    Router::new()
        .route("/api/orders", get(handlers::list_orders))
        .route("/api/orders/{id}", get(handlers::get_order))
        .route("/api/orders/{id}/status", patch(handlers::update_order_status))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::orders::dtos::OrderResponseDto;
    use crate::features::orders::models::OrderStatus;
    use crate::shared::test_helpers::seeded_store;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let service = Arc::new(OrderService::new(seeded_store()));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_orders_in_store_order() {
        let server = server();

        let response = server.get("/api/orders").await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<OrderResponseDto>> = response.json();
        let ids: Vec<_> = body.data.unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1001", "1002", "1003", "1004", "1005"]);
        assert_eq!(body.meta.unwrap().total, 5);
    }

    #[tokio::test]
    async fn test_list_orders_search_and_paging() {
        let server = server();

        let response = server
            .get("/api/orders")
            .add_query_param("q", "ASBEST")
            .await;
        let body: ApiResponse<Vec<OrderResponseDto>> = response.json();
        let ids: Vec<_> = body.data.unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1001", "1005"]);

        let response = server
            .get("/api/orders")
            .add_query_param("page", 2)
            .add_query_param("page_size", 2)
            .await;
        let body: ApiResponse<Vec<OrderResponseDto>> = response.json();
        let ids: Vec<_> = body.data.unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1003", "1004"]);
        assert_eq!(body.meta.unwrap().total, 5);
    }

    #[tokio::test]
    async fn test_list_orders_page_past_the_end_is_empty() {
        let response = server()
            .get("/api/orders")
            .add_query_param("page", i64::MAX)
            .add_query_param("page_size", 100)
            .await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<OrderResponseDto>> = response.json();
        assert!(body.data.unwrap().is_empty());
        assert_eq!(body.meta.unwrap().total, 5);
    }

    #[tokio::test]
    async fn test_list_orders_rejects_unknown_status() {
        let response = server()
            .get("/api/orders")
            .add_query_param("status", "archived")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_order_json_shape() {
        let response = server().get("/api/orders/1002").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let order = &body["data"];
        assert_eq!(order["clientName"], "Ericsson");
        assert_eq!(order["clientEmail"], "facilities@ericsson.com");
        assert_eq!(order["type"], "building");
        assert_eq!(order["status"], "pending");
        assert_eq!(order["date"], "2023-10-20");
        assert!(order["coordinates"]["lat"].is_number());
    }

    #[tokio::test]
    async fn test_get_unknown_order_is_not_found() {
        let response = server().get("/api/orders/9999").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_status() {
        let server = server();

        let response = server
            .patch("/api/orders/1001/status")
            .json(&json!({ "status": "completed" }))
            .await;
        response.assert_status_ok();

        let body: ApiResponse<OrderResponseDto> = server.get("/api/orders/1001").await.json();
        assert_eq!(body.data.unwrap().status, OrderStatus::Completed);

        server
            .patch("/api/orders/1001/status")
            .json(&json!({ "status": "archived" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .patch("/api/orders/9999/status")
            .json(&json!({ "status": "completed" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
