/// A consumable logged against an order
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: String,
    pub order_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Data for appending a material; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub order_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}
