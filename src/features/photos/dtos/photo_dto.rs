use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::photos::models::OrderPhoto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponseDto {
    pub id: String,
    pub order_id: String,
    /// URL or `data:` URI
    pub image_data: String,
    pub date: DateTime<Utc>,
}

impl From<OrderPhoto> for PhotoResponseDto {
    fn from(p: OrderPhoto) -> Self {
        Self {
            id: p.id,
            order_id: p.order_id,
            image_data: p.image_data,
            date: p.date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoDto {
    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub image_data: String,

    /// Capture time, defaults to now
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletePhotoResponseDto {
    /// False when no such photo existed on the order
    pub deleted: bool,
}

/// Outcome of pushing a photo to the export endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoExportResultDto {
    pub photo_id: String,
    pub endpoint: String,
    /// HTTP status returned by the endpoint
    pub status: u16,
}

/// Body POSTed to the export endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoExportPayload<'a> {
    pub order_id: &'a str,
    pub photo_id: &'a str,
    pub image_data: &'a str,
    pub date: DateTime<Utc>,
}
