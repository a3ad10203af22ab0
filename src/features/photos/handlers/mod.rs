mod photo_handler;

pub use photo_handler::{
    __path_create_photo, __path_delete_photo, __path_export_photo, __path_list_photos,
    create_photo, delete_photo, export_photo, list_photos,
};
