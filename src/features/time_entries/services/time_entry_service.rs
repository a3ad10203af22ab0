use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::time_entries::dtos::{CreateTimeEntryDto, TotalHoursDto};
use crate::features::time_entries::models::{NewTimeEntry, TimeEntry};
use crate::modules::store::SharedStore;

pub struct TimeEntryService {
    store: SharedStore,
}

impl TimeEntryService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_by_order(&self, order_id: &str) -> Result<Vec<TimeEntry>> {
        let store = self.store.read().await;

        if !store.contains_order(order_id) {
            return Err(AppError::NotFound(format!("Order '{}' not found", order_id)));
        }

        Ok(store.time_entries_by_order(order_id))
    }

    pub async fn total_hours(&self, order_id: &str) -> Result<TotalHoursDto> {
        let entries = self.list_by_order(order_id).await?;

        Ok(TotalHoursDto {
            order_id: order_id.to_string(),
            total_hours: entries.iter().map(|e| e.hours).sum(),
            entries: entries.len(),
        })
    }

    pub async fn add(&self, order_id: &str, dto: CreateTimeEntryDto) -> Result<TimeEntry> {
        let entry = self.store.write().await.add_time_entry(NewTimeEntry {
            order_id: order_id.to_string(),
            date: dto.date.unwrap_or_else(|| Utc::now().date_naive()),
            hours: dto.hours,
            description: dto.description.trim().to_string(),
        })?;

        tracing::info!(
            "Time entry added: id={}, order={}, date={}, hours={}",
            entry.id,
            entry.order_id,
            entry.date,
            entry.hours
        );

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::seeded_store;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_total_hours_of_seeded_order() {
        let service = TimeEntryService::new(seeded_store());

        let total = service.total_hours("1003").await.unwrap();
        assert_eq!(total.total_hours, 9.0);
        assert_eq!(total.entries, 2);

        let empty = service.total_hours("1004").await.unwrap();
        assert_eq!(empty.total_hours, 0.0);
        assert_eq!(empty.entries, 0);
    }

    #[tokio::test]
    async fn test_add_defaults_date_to_today() {
        let service = TimeEntryService::new(seeded_store());

        let entry = service
            .add(
                "1004",
                CreateTimeEntryDto {
                    date: None,
                    hours: 3.5,
                    description: "Golvrengöring".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(entry.date, Utc::now().date_naive());
        assert_eq!(service.total_hours("1004").await.unwrap().total_hours, 3.5);
    }

    #[tokio::test]
    async fn test_add_keeps_given_date() {
        let service = TimeEntryService::new(seeded_store());
        let on = NaiveDate::from_ymd_opt(2023, 10, 17).unwrap();

        let entry = service
            .add(
                "1001",
                CreateTimeEntryDto {
                    date: Some(on),
                    hours: 2.0,
                    description: "Slutstädning".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(entry.date, on);
        assert_eq!(entry.id, "t6");
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        let service = TimeEntryService::new(seeded_store());
        assert!(matches!(
            service.total_hours("9999").await,
            Err(AppError::NotFound(_))
        ));
    }
}
