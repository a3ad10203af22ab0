pub mod assistant;
pub mod auth;
pub mod dashboard;
pub mod diary;
pub mod materials;
pub mod orders;
pub mod photos;
pub mod settings;
pub mod time_entries;
