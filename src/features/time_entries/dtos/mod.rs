mod time_entry_dto;

pub use time_entry_dto::{CreateTimeEntryDto, TimeEntryResponseDto, TotalHoursDto};
