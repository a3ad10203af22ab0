use chrono::{DateTime, Utc};

/// Captured image attached to an order.
///
/// `image_data` is either a URL or a `data:` URI straight from the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPhoto {
    pub id: String,
    pub order_id: String,
    pub image_data: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOrderPhoto {
    pub order_id: String,
    pub image_data: String,
    pub date: DateTime<Utc>,
}
