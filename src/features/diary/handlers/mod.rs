mod diary_handler;

pub use diary_handler::{
    __path_create_diary_entry, __path_list_diary_entries, create_diary_entry, list_diary_entries,
};
