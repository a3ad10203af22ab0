use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::time_entries::models::TimeEntry;
use crate::shared::constants::MAX_HOURS_PER_ENTRY;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryResponseDto {
    pub id: String,
    pub order_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}

impl From<TimeEntry> for TimeEntryResponseDto {
    fn from(t: TimeEntry) -> Self {
        Self {
            id: t.id,
            order_id: t.order_id,
            date: t.date,
            hours: t.hours,
            description: t.description,
        }
    }
}

/// Request DTO for logging hours. `date` defaults to today.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTimeEntryDto {
    pub date: Option<NaiveDate>,

    #[validate(range(
        exclusive_min = 0.0,
        max = MAX_HOURS_PER_ENTRY,
        message = "Hours must be greater than 0 and at most 24"
    ))]
    pub hours: f64,

    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub description: String,
}

/// Summed hours for an order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalHoursDto {
    pub order_id: String,
    pub total_hours: f64,
    pub entries: usize,
}
