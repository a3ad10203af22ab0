use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::materials::models::Material;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponseDto {
    pub id: String,
    pub order_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl From<Material> for MaterialResponseDto {
    fn from(m: Material) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            name: m.name,
            quantity: m.quantity,
            unit: m.unit,
        }
    }
}

/// Request DTO for logging a material on an order
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMaterialDto {
    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Quantity must be greater than 0"))]
    pub quantity: f64,

    /// Unit of measure, e.g. `st`, `liter`, `par`
    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub unit: String,
}
