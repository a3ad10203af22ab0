use chrono::NaiveDate;

/// Labour hours logged against an order
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: String,
    pub order_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewTimeEntry {
    pub order_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}
