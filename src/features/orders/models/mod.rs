mod order;

pub use order::{Coordinates, Order, OrderStatus, OrderType};
