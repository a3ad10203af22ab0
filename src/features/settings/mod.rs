//! Per-user settings: display preferences and photo export target.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/PUT/DELETE | `/api/settings/preferences` | Language and theme |
//! | GET/PUT/DELETE | `/api/settings/photo-export` | Export endpoint, API key, auto sync |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SettingsService;
