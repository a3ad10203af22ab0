mod settings_handler;

pub use settings_handler::{
    __path_get_photo_export_settings, __path_get_preferences,
    __path_reset_photo_export_settings, __path_reset_preferences,
    __path_update_photo_export_settings, __path_update_preferences, get_photo_export_settings,
    get_preferences, reset_photo_export_settings, reset_preferences,
    update_photo_export_settings, update_preferences,
};
