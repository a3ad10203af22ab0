mod order_handler;

pub use order_handler::{
    __path_get_order, __path_list_orders, __path_update_order_status, get_order, list_orders,
    update_order_status,
};
