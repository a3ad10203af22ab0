use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::diary::dtos::CreateDiaryEntryDto;
use crate::features::diary::models::{DiaryEntry, NewDiaryEntry};
use crate::modules::store::SharedStore;

pub struct DiaryService {
    store: SharedStore,
}

impl DiaryService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_by_order(&self, order_id: &str) -> Result<Vec<DiaryEntry>> {
        let store = self.store.read().await;

        if !store.contains_order(order_id) {
            return Err(AppError::NotFound(format!("Order '{}' not found", order_id)));
        }

        Ok(store.diary_entries_by_order(order_id))
    }

    pub async fn add(&self, order_id: &str, dto: CreateDiaryEntryDto) -> Result<DiaryEntry> {
        let entry = self.store.write().await.add_diary_entry(NewDiaryEntry {
            order_id: order_id.to_string(),
            date: dto.date.unwrap_or_else(|| Utc::now().date_naive()),
            text: dto.text.trim().to_string(),
        })?;

        tracing::info!(
            "Diary entry added: id={}, order={}, date={}",
            entry.id,
            entry.order_id,
            entry.date
        );

        Ok(entry)
    }
}
