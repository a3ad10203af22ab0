mod photo_export_settings;
mod preferences;

pub use photo_export_settings::PhotoExportSettings;
pub use preferences::{Language, Preferences, Theme};
