//! Field assistant with canned advice per cleaning topic.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/assistant/greeting` | Opening message |
//! | POST | `/api/assistant/chat` | Reply to a message |
//! | GET | `/api/assistant/tips` | Topic tips |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AssistantService;
