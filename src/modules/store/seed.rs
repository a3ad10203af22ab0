//! Demo data set loaded at startup when `SEED_DEMO_DATA` is on.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::order_store::{OrderStore, StoreError};
use crate::features::diary::models::DiaryEntry;
use crate::features::materials::models::Material;
use crate::features::orders::models::{Coordinates, Order, OrderStatus, OrderType};
use crate::features::photos::models::OrderPhoto;
use crate::features::time_entries::models::TimeEntry;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, StoreError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| StoreError::InvalidSeedDate(format!("{}-{}-{}", year, month, day)))
}

fn timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
) -> Result<DateTime<Utc>, StoreError> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .ok_or_else(|| {
            StoreError::InvalidSeedDate(format!(
                "{}-{}-{} {}:{}",
                year, month, day, hour, min
            ))
        })
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    client_name: &str,
    client_email: &str,
    client_phone: &str,
    address: &str,
    (lat, lng): (f64, f64),
    order_type: OrderType,
    status: OrderStatus,
    date: NaiveDate,
    description: &str,
) -> Order {
    Order {
        id: id.to_string(),
        client_name: client_name.to_string(),
        client_email: client_email.to_string(),
        client_phone: client_phone.to_string(),
        address: address.to_string(),
        coordinates: Coordinates { lat, lng },
        order_type,
        status,
        date,
        description: description.to_string(),
    }
}

fn demo_orders() -> Result<Vec<Order>, StoreError> {
    Ok(vec![
        order(
            "1001",
            "Volvo AB",
            "contact@volvo.se",
            "070-123-4567",
            "Göteborgsvägen 123, Göteborg",
            (57.708870, 11.974560),
            OrderType::Asbestos,
            OrderStatus::InProgress,
            date(2023, 10, 15)?,
            "Asbestsanering i äldre fabrikslokal, ca 500 kvm. Särskilda säkerhetsföreskrifter gäller.",
        ),
        order(
            "1002",
            "Ericsson",
            "facilities@ericsson.com",
            "070-987-6543",
            "Torshamnsgatan 21, Kista",
            (59.405540, 17.956790),
            OrderType::Building,
            OrderStatus::Pending,
            date(2023, 10, 20)?,
            "Fasadrengöring av kontorsbyggnad, 8 våningar. Tillgång till arbetsplattform finns.",
        ),
        order(
            "1003",
            "Stockholm Stad",
            "kontakt@stockholm.se",
            "08-508-00-000",
            "Sergels Torg, Stockholm",
            (59.332780, 18.064890),
            OrderType::Graffiti,
            OrderStatus::Completed,
            date(2023, 10, 12)?,
            "Klottersanering av offentliga ytor runt Sergels torg. Miljövänliga medel ska användas.",
        ),
        order(
            "1004",
            "ICA Maxi Solna",
            "solna@ica.se",
            "08-123-4567",
            "Solnavägen 5, Solna",
            (59.362740, 18.020140),
            OrderType::General,
            OrderStatus::Pending,
            date(2023, 10, 25)?,
            "Djuprengöring av butikslokaler efter renovering, cirka 2000 kvm.",
        ),
        order(
            "1005",
            "Skanska",
            "projekt@skanska.se",
            "070-123-7890",
            "Arenastaden, Solna",
            (59.372470, 18.002490),
            OrderType::Asbestos,
            OrderStatus::InProgress,
            date(2023, 10, 18)?,
            "Asbestsanering inför rivning av äldre industribyggnad.",
        ),
    ])
}

fn material(id: &str, order_id: &str, name: &str, quantity: f64, unit: &str) -> Material {
    Material {
        id: id.to_string(),
        order_id: order_id.to_string(),
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    }
}

fn demo_materials() -> Vec<Material> {
    vec![
        material("m1", "1001", "Skyddsdräkt", 5.0, "st"),
        material("m2", "1001", "Andningsskydd P3", 5.0, "st"),
        material("m3", "1001", "Säkerhetspåsar", 20.0, "st"),
        material("m4", "1002", "Högtryckstvätt", 1.0, "st"),
        material("m5", "1002", "Rengöringsmedel", 10.0, "liter"),
        material("m6", "1003", "Graffitiborttagningsmedel", 5.0, "liter"),
        material("m7", "1003", "Skyddshandskar", 3.0, "par"),
    ]
}

fn time_entry(id: &str, order_id: &str, on: NaiveDate, hours: f64, description: &str) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        order_id: order_id.to_string(),
        date: on,
        hours,
        description: description.to_string(),
    }
}

fn demo_time_entries() -> Result<Vec<TimeEntry>, StoreError> {
    Ok(vec![
        time_entry("t1", "1001", date(2023, 10, 15)?, 8.0, "Förberedelser och initial sanering"),
        time_entry("t2", "1001", date(2023, 10, 16)?, 8.0, "Fortsatt sanering av huvudområde"),
        time_entry("t3", "1002", date(2023, 10, 20)?, 6.0, "Inspektion och planering"),
        time_entry("t4", "1003", date(2023, 10, 12)?, 4.0, "Sanering av mindre klotterområden"),
        time_entry("t5", "1003", date(2023, 10, 13)?, 5.0, "Sanering av större väggytor"),
    ])
}

fn diary_entry(id: &str, order_id: &str, on: NaiveDate, text: &str) -> DiaryEntry {
    DiaryEntry {
        id: id.to_string(),
        order_id: order_id.to_string(),
        date: on,
        text: text.to_string(),
    }
}

fn demo_diary_entries() -> Result<Vec<DiaryEntry>, StoreError> {
    Ok(vec![
        diary_entry(
            "d1",
            "1001",
            date(2023, 10, 15)?,
            "Påbörjade säkerhetsgenomgång med teamet. Alla säkerhetsprotokoller följdes. Identifierade huvudområden för sanering.",
        ),
        diary_entry(
            "d2",
            "1001",
            date(2023, 10, 16)?,
            "Fortsatte med sanering av rum 3-5. Hittade ytterligare asbestmaterial i innertak som inte var dokumenterat.",
        ),
        diary_entry(
            "d3",
            "1002",
            date(2023, 10, 20)?,
            "Inspekterade byggnaden och planerade arbetet. Beställde extra material för fasadrengöring.",
        ),
        diary_entry(
            "d4",
            "1003",
            date(2023, 10, 12)?,
            "Avslutade saneringen av klotterytor vid södra ingången. Använde miljövänliga medel enligt krav.",
        ),
    ])
}

fn photo(id: &str, order_id: &str, image_data: &str, date: DateTime<Utc>) -> OrderPhoto {
    OrderPhoto {
        id: id.to_string(),
        order_id: order_id.to_string(),
        image_data: image_data.to_string(),
        date,
    }
}

fn demo_photos() -> Result<Vec<OrderPhoto>, StoreError> {
    Ok(vec![
        photo(
            "p1",
            "1001",
            "https://source.unsplash.com/random/800x600/?construction",
            timestamp(2023, 10, 15, 9, 30)?,
        ),
        photo(
            "p2",
            "1001",
            "https://source.unsplash.com/random/800x600/?building",
            timestamp(2023, 10, 15, 11, 15)?,
        ),
        photo(
            "p3",
            "1003",
            "https://source.unsplash.com/random/800x600/?graffiti",
            timestamp(2023, 10, 12, 14, 20)?,
        ),
    ])
}

impl OrderStore {
    /// Store pre-loaded with the demo orders and their records
    pub fn seeded() -> Result<Self, StoreError> {
        let mut store = Self::new();
        for order in demo_orders()? {
            store.insert_order(order)?;
        }
        demo_materials()
            .into_iter()
            .for_each(|m| store.insert_material(m));
        demo_time_entries()?
            .into_iter()
            .for_each(|t| store.insert_time_entry(t));
        demo_diary_entries()?
            .into_iter()
            .for_each(|d| store.insert_diary_entry(d));
        demo_photos()?
            .into_iter()
            .for_each(|p| store.insert_photo(p));
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::materials::models::NewMaterial;

    #[test]
    fn test_seeded_store_contents() {
        let store = OrderStore::seeded().unwrap();
        assert_eq!(store.orders().len(), 5);
        assert_eq!(store.materials_by_order("1001").len(), 3);
        assert_eq!(store.time_entries_by_order("1003").len(), 2);
        assert_eq!(store.diary_entries_by_order("1002").len(), 1);
        assert_eq!(store.photos_by_order("1001").len(), 2);
        assert!(store.photos_by_order("1004").is_empty());
    }

    #[test]
    fn test_invalid_seed_date_is_an_error() {
        assert!(matches!(
            date(2023, 2, 30),
            Err(StoreError::InvalidSeedDate(_))
        ));
        assert!(matches!(
            timestamp(2023, 10, 15, 25, 0),
            Err(StoreError::InvalidSeedDate(_))
        ));
        assert_eq!(
            date(2023, 10, 15).unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap()
        );
    }

    #[test]
    fn test_seed_order_1001_completes() {
        let mut store = OrderStore::seeded().unwrap();
        let before = store.order_by_id("1001").unwrap();
        assert_eq!(before.status, OrderStatus::InProgress);

        store.update_order_status("1001", OrderStatus::Completed);

        let after = store.order_by_id("1001").unwrap();
        assert_eq!(after.status, OrderStatus::Completed);
        assert_eq!(after.client_name, before.client_name);
        assert_eq!(after.address, before.address);
        assert_eq!(after.coordinates, before.coordinates);
        assert_eq!(after.order_type, before.order_type);
        assert_eq!(after.date, before.date);
        assert_eq!(after.description, before.description);
    }

    #[test]
    fn test_seeded_sequences_continue_after_demo_ids() {
        let mut store = OrderStore::seeded().unwrap();
        let material = store
            .add_material(NewMaterial {
                order_id: "1001".to_string(),
                name: "Gloves".to_string(),
                quantity: 2.0,
                unit: "par".to_string(),
            })
            .unwrap();
        assert_eq!(material.id, "m8");
    }

    #[test]
    fn test_deleting_seed_photo_p2() {
        let mut store = OrderStore::seeded().unwrap();
        assert!(store.delete_photo("p2"));
        let ids: Vec<_> = store
            .photos_by_order("1001")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1".to_string()]);
    }
}
