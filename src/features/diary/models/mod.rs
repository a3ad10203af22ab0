mod diary_entry;

pub use diary_entry::{DiaryEntry, NewDiaryEntry};
