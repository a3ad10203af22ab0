mod order_photo;

pub use order_photo::{NewOrderPhoto, OrderPhoto};
