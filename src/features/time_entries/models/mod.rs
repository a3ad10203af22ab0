mod time_entry;

pub use time_entry::{NewTimeEntry, TimeEntry};
