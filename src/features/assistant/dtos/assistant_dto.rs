use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::settings::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// One message of the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessageDto {
    pub fn from_ai(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            sender: Sender::Ai,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatRequestDto {
    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub message: String,

    /// Reply language (default: sv)
    pub lang: Option<Language>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
    /// `sv` (default) or `en`
    pub lang: Option<Language>,
}

/// Topics the assistant can help with
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TipsResponseDto {
    pub intro: String,
    pub tips: Vec<String>,
}
