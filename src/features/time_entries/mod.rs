//! Labour hours logged on an order.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TimeEntryService;
