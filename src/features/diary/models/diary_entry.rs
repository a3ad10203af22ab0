use chrono::NaiveDate;

/// Free-text work diary note
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryEntry {
    pub id: String,
    pub order_id: String,
    pub date: NaiveDate,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct NewDiaryEntry {
    pub order_id: String,
    pub date: NaiveDate,
    pub text: String,
}
