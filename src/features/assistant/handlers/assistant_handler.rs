use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::assistant::dtos::{
    ChatMessageDto, ChatRequestDto, LanguageQuery, TipsResponseDto,
};
use crate::features::assistant::services::AssistantService;
use crate::shared::types::ApiResponse;

/// Opening message of the assistant
#[utoipa::path(
    get,
    path = "/api/assistant/greeting",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Greeting message", body = ApiResponse<ChatMessageDto>)
    ),
    tag = "assistant",
    security(("bearer_auth" = []))
)]
pub async fn get_greeting(
    State(service): State<Arc<AssistantService>>,
    AppQuery(query): AppQuery<LanguageQuery>,
) -> Result<Json<ApiResponse<ChatMessageDto>>> {
    let message = service.greeting(query.lang.unwrap_or_default());
    Ok(Json(ApiResponse::success(Some(message), None, None)))
}

/// Ask the assistant something
///
/// Mentioning an existing order number returns a summary of that order;
/// otherwise the reply is picked by keyword.
#[utoipa::path(
    post,
    path = "/api/assistant/chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ApiResponse<ChatMessageDto>),
        (status = 400, description = "Empty message")
    ),
    tag = "assistant",
    security(("bearer_auth" = []))
)]
pub async fn chat(
    State(service): State<Arc<AssistantService>>,
    AppJson(dto): AppJson<ChatRequestDto>,
) -> Result<Json<ApiResponse<ChatMessageDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reply = service
        .reply(&dto.message, dto.lang.unwrap_or_default())
        .await?;
    Ok(Json(ApiResponse::success(Some(reply), None, None)))
}

/// Topics the assistant can help with
#[utoipa::path(
    get,
    path = "/api/assistant/tips",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Assistant tips", body = ApiResponse<TipsResponseDto>)
    ),
    tag = "assistant",
    security(("bearer_auth" = []))
)]
pub async fn get_tips(
    State(service): State<Arc<AssistantService>>,
    AppQuery(query): AppQuery<LanguageQuery>,
) -> Result<Json<ApiResponse<TipsResponseDto>>> {
    let tips = service.tips(query.lang.unwrap_or_default());
    Ok(Json(ApiResponse::success(Some(tips), None, None)))
}
