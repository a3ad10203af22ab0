mod order_store;
mod seed;

pub use order_store::{OrderStore, SharedStore, StoreError};
