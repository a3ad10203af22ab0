use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of job an order describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Asbestos,
    Building,
    Graffiti,
    General,
}

impl OrderType {
    /// Wire name, also what free-text search matches against
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Asbestos => "asbestos",
            OrderType::Building => "building",
            OrderType::Graffiti => "graffiti",
            OrderType::General => "general",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order status. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::InProgress => write!(f, "inProgress"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A cleaning or remediation job for a client at an address
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub description: String,
}

impl Order {
    /// Case-insensitive substring match on id, client name, address and type.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.client_name.to_lowercase().contains(needle)
            || self.address.to_lowercase().contains(needle)
            || self.order_type.as_str().contains(needle)
    }
}
