use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::assistant::handlers;
use crate::features::assistant::services::AssistantService;

pub fn routes(service: Arc<AssistantService>) -> Router {
    Router::new()
        .route("/api/assistant/greeting", get(handlers::get_greeting))
        .route("/api/assistant/chat", post(handlers::chat))
        .route("/api/assistant/tips", get(handlers::get_tips))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::assistant::dtos::{ChatMessageDto, Sender};
    use crate::shared::test_helpers::seeded_store;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(AssistantService::new(seeded_store())))).unwrap()
    }

    #[tokio::test]
    async fn test_greeting_defaults_to_swedish() {
        let server = server();

        let body: ApiResponse<ChatMessageDto> = server.get("/api/assistant/greeting").await.json();
        let message = body.data.unwrap();
        assert_eq!(message.sender, Sender::Ai);
        assert!(message.text.starts_with("Hej!"));

        let body: Value = server
            .get("/api/assistant/greeting")
            .add_query_param("lang", "en")
            .await
            .json();
        assert_eq!(body["data"]["sender"], "ai");
        assert!(body["data"]["text"].as_str().unwrap().starts_with("Hi!"));

        server
            .get("/api/assistant/greeting")
            .add_query_param("lang", "de")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat() {
        let response = server()
            .post("/api/assistant/chat")
            .json(&json!({ "message": "Tell me about order 1003", "lang": "en" }))
            .await;

        response.assert_status_ok();
        let body: ApiResponse<ChatMessageDto> = response.json();
        let text = body.data.unwrap().text;
        assert!(text.starts_with("Order 1003 for Stockholm Stad"));
        assert!(text.contains("Type: Graffiti Removal"));
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        server()
            .post("/api/assistant/chat")
            .json(&json!({ "message": "  " }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tips() {
        let body: Value = server().get("/api/assistant/tips").await.json();
        assert_eq!(body["data"]["intro"], "AI-assistenten kan hjälpa dig med:");
        assert_eq!(body["data"]["tips"].as_array().unwrap().len(), 3);
    }
}
