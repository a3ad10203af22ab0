//! Work orders: listing, search, lookup and status changes.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/orders` | Yes | List/search orders |
//! | GET | `/api/orders/{id}` | Yes | Get order |
//! | PATCH | `/api/orders/{id}/status` | Yes | Change order status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::OrderService;
