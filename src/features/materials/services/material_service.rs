use crate::core::error::{AppError, Result};
use crate::features::materials::dtos::CreateMaterialDto;
use crate::features::materials::models::{Material, NewMaterial};
use crate::modules::store::SharedStore;

pub struct MaterialService {
    store: SharedStore,
}

impl MaterialService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_by_order(&self, order_id: &str) -> Result<Vec<Material>> {
        let store = self.store.read().await;

        if !store.contains_order(order_id) {
            return Err(AppError::NotFound(format!("Order '{}' not found", order_id)));
        }

        Ok(store.materials_by_order(order_id))
    }

    pub async fn add(&self, order_id: &str, dto: CreateMaterialDto) -> Result<Material> {
        let material = self.store.write().await.add_material(NewMaterial {
            order_id: order_id.to_string(),
            name: dto.name.trim().to_string(),
            quantity: dto.quantity,
            unit: dto.unit.trim().to_string(),
        })?;

        tracing::info!(
            "Material added: id={}, order={}, {} {} {}",
            material.id,
            material.order_id,
            material.quantity,
            material.unit,
            material.name
        );

        Ok(material)
    }
}
