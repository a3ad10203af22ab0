use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::diary::handlers;
use crate::features::diary::services::DiaryService;

pub fn routes(service: Arc<DiaryService>) -> Router {
    Router::new()
        .route(
            "/api/orders/{id}/diary-entries",
            get(handlers::list_diary_entries).post(handlers::create_diary_entry),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::diary::dtos::DiaryEntryResponseDto;
    use crate::shared::test_helpers::seeded_store;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let service = Arc::new(DiaryService::new(seeded_store()));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_create_diary_entry() {
        let server = server();

        let response = server
            .post("/api/orders/1003/diary-entries")
            .json(&json!({ "date": "2023-10-13", "text": "Slutbesiktning klar." }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created: ApiResponse<DiaryEntryResponseDto> = response.json();
        let created = created.data.unwrap();
        assert_eq!(created.date.to_string(), "2023-10-13");

        let listed: ApiResponse<Vec<DiaryEntryResponseDto>> =
            server.get("/api/orders/1003/diary-entries").await.json();
        assert_eq!(listed.meta.unwrap().total, 2);
        assert_eq!(listed.data.unwrap()[1].id, created.id);
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        server()
            .post("/api/orders/1003/diary-entries")
            .json(&json!({ "text": " \n " }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        server()
            .post("/api/orders/9999/diary-entries")
            .json(&json!({ "text": "Anteckning" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
