use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::diary::models::DiaryEntry;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntryResponseDto {
    pub id: String,
    pub order_id: String,
    pub date: NaiveDate,
    pub text: String,
}

impl From<DiaryEntry> for DiaryEntryResponseDto {
    fn from(d: DiaryEntry) -> Self {
        Self {
            id: d.id,
            order_id: d.order_id,
            date: d.date,
            text: d.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDiaryEntryDto {
    /// Defaults to today
    pub date: Option<NaiveDate>,

    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub text: String,
}
