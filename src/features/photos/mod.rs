//! Order photos and their export to an external endpoint.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PhotoExportService, PhotoService};
