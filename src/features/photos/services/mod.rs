mod photo_export_service;
mod photo_service;

pub use photo_export_service::PhotoExportService;
pub use photo_service::PhotoService;
