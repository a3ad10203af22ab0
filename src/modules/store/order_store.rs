use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::features::diary::models::{DiaryEntry, NewDiaryEntry};
use crate::features::materials::models::{Material, NewMaterial};
use crate::features::orders::models::{Order, OrderStatus};
use crate::features::photos::models::{NewOrderPhoto, OrderPhoto};
use crate::features::time_entries::models::{NewTimeEntry, TimeEntry};

/// Store handle shared by all services
pub type SharedStore = Arc<RwLock<OrderStore>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Order '{0}' not found")]
    OrderNotFound(String),

    #[error("Order '{0}' already exists")]
    DuplicateOrder(String),

    #[error("Invalid date in demo data: {0}")]
    InvalidSeedDate(String),
}

/// Prefixed id generator (`m1`, `m2`, ...).
///
/// The counter only moves forward, so ids freed by a delete are never handed
/// out again.
#[derive(Debug, Clone)]
struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Move past an id inserted from outside (seed data), if it uses our prefix
    fn observe(&mut self, id: &str) {
        if let Some(n) = id
            .strip_prefix(self.prefix)
            .and_then(|rest| rest.parse::<u64>().ok())
        {
            self.next = self.next.max(n + 1);
        }
    }
}

/// Order counts used by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderSummary {
    pub total: usize,
    pub by_status: HashMap<OrderStatus, usize>,
}

impl OrderSummary {
    pub fn count(&self, status: OrderStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Authoritative in-memory collection of orders and their child records
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Vec<Order>,
    materials: Vec<Material>,
    time_entries: Vec<TimeEntry>,
    diary_entries: Vec<DiaryEntry>,
    photos: Vec<OrderPhoto>,
    material_ids: IdSequence,
    time_entry_ids: IdSequence,
    diary_entry_ids: IdSequence,
    photo_ids: IdSequence,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            materials: Vec::new(),
            time_entries: Vec::new(),
            diary_entries: Vec::new(),
            photos: Vec::new(),
            material_ids: IdSequence::new("m"),
            time_entry_ids: IdSequence::new("t"),
            diary_entry_ids: IdSequence::new("d"),
            photo_ids: IdSequence::new("p"),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Copy of all orders in insertion order
    pub fn orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn order_by_id(&self, id: &str) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    pub fn contains_order(&self, id: &str) -> bool {
        self.orders.iter().any(|o| o.id == id)
    }

    /// Orders whose id, client name, address or type contains `query`,
    /// ignoring case. An empty query matches every order.
    pub fn search_orders(&self, query: &str) -> Vec<Order> {
        let needle = query.to_lowercase();
        self.orders
            .iter()
            .filter(|o| o.matches(&needle))
            .cloned()
            .collect()
    }

    /// Replace the status of an order, leaving every other field untouched
    pub fn update_order_status(&mut self, id: &str, status: OrderStatus) -> Option<Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        order.status = status;
        Some(order.clone())
    }

    /// Add an order coming from intake (or seed data)
    pub fn insert_order(&mut self, order: Order) -> Result<Order, StoreError> {
        if self.contains_order(&order.id) {
            return Err(StoreError::DuplicateOrder(order.id));
        }
        self.orders.push(order.clone());
        Ok(order)
    }

    pub fn order_summary(&self) -> OrderSummary {
        let mut summary = OrderSummary {
            total: self.orders.len(),
            by_status: HashMap::new(),
        };
        for order in &self.orders {
            *summary.by_status.entry(order.status).or_insert(0) += 1;
        }
        summary
    }

    fn ensure_order(&self, order_id: &str) -> Result<(), StoreError> {
        if self.contains_order(order_id) {
            Ok(())
        } else {
            Err(StoreError::OrderNotFound(order_id.to_string()))
        }
    }

    // -------------------------------------------------------------------------
    // Materials
    // -------------------------------------------------------------------------

    pub fn materials_by_order(&self, order_id: &str) -> Vec<Material> {
        self.materials
            .iter()
            .filter(|m| m.order_id == order_id)
            .cloned()
            .collect()
    }

    pub fn add_material(&mut self, new: NewMaterial) -> Result<Material, StoreError> {
        self.ensure_order(&new.order_id)?;
        let material = Material {
            id: self.material_ids.next_id(),
            order_id: new.order_id,
            name: new.name,
            quantity: new.quantity,
            unit: new.unit,
        };
        self.materials.push(material.clone());
        Ok(material)
    }

    pub(crate) fn insert_material(&mut self, material: Material) {
        self.material_ids.observe(&material.id);
        self.materials.push(material);
    }

    // -------------------------------------------------------------------------
    // Time entries
    // -------------------------------------------------------------------------

    pub fn time_entries_by_order(&self, order_id: &str) -> Vec<TimeEntry> {
        self.time_entries
            .iter()
            .filter(|t| t.order_id == order_id)
            .cloned()
            .collect()
    }

    pub fn add_time_entry(&mut self, new: NewTimeEntry) -> Result<TimeEntry, StoreError> {
        self.ensure_order(&new.order_id)?;
        let entry = TimeEntry {
            id: self.time_entry_ids.next_id(),
            order_id: new.order_id,
            date: new.date,
            hours: new.hours,
            description: new.description,
        };
        self.time_entries.push(entry.clone());
        Ok(entry)
    }

    pub(crate) fn insert_time_entry(&mut self, entry: TimeEntry) {
        self.time_entry_ids.observe(&entry.id);
        self.time_entries.push(entry);
    }

    // -------------------------------------------------------------------------
    // Diary entries
    // -------------------------------------------------------------------------

    pub fn diary_entries_by_order(&self, order_id: &str) -> Vec<DiaryEntry> {
        self.diary_entries
            .iter()
            .filter(|d| d.order_id == order_id)
            .cloned()
            .collect()
    }

    pub fn add_diary_entry(&mut self, new: NewDiaryEntry) -> Result<DiaryEntry, StoreError> {
        self.ensure_order(&new.order_id)?;
        let entry = DiaryEntry {
            id: self.diary_entry_ids.next_id(),
            order_id: new.order_id,
            date: new.date,
            text: new.text,
        };
        self.diary_entries.push(entry.clone());
        Ok(entry)
    }

    pub(crate) fn insert_diary_entry(&mut self, entry: DiaryEntry) {
        self.diary_entry_ids.observe(&entry.id);
        self.diary_entries.push(entry);
    }

    // -------------------------------------------------------------------------
    // Photos
    // -------------------------------------------------------------------------

    pub fn photos_by_order(&self, order_id: &str) -> Vec<OrderPhoto> {
        self.photos
            .iter()
            .filter(|p| p.order_id == order_id)
            .cloned()
            .collect()
    }

    pub fn photo_by_id(&self, photo_id: &str) -> Option<OrderPhoto> {
        self.photos.iter().find(|p| p.id == photo_id).cloned()
    }

    pub fn add_photo(&mut self, new: NewOrderPhoto) -> Result<OrderPhoto, StoreError> {
        self.ensure_order(&new.order_id)?;
        let photo = OrderPhoto {
            id: self.photo_ids.next_id(),
            order_id: new.order_id,
            image_data: new.image_data,
            date: new.date,
        };
        self.photos.push(photo.clone());
        Ok(photo)
    }

    pub(crate) fn insert_photo(&mut self, photo: OrderPhoto) {
        self.photo_ids.observe(&photo.id);
        self.photos.push(photo);
    }

    /// Remove a photo. Returns whether anything was removed; an unknown id
    /// leaves the collection as it was.
    pub fn delete_photo(&mut self, photo_id: &str) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != photo_id);
        self.photos.len() != before
    }
}
