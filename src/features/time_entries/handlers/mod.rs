mod time_entry_handler;

pub use time_entry_handler::{
    __path_create_time_entry, __path_get_total_hours, __path_list_time_entries,
    create_time_entry, get_total_hours, list_time_entries,
};
