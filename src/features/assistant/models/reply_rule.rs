use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Order numbers are four or more digits
    static ref ORDER_ID_RE: Regex = Regex::new(r"\b\d{4,}\b").unwrap();

    static ref ASBESTOS_RE: Regex = Regex::new(r"(?i)asbest").unwrap();
    static ref GRAFFITI_RE: Regex = Regex::new(r"(?i)graffiti|klotter").unwrap();
    static ref BUILDING_RE: Regex = Regex::new(r"(?i)byggstädning|building").unwrap();
}

/// Topic a user message is about, in matching priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Asbestos,
    Graffiti,
    Building,
    Unknown,
}

impl Topic {
    /// Keyword topic of a message. `asbest` also covers `asbestos`.
    pub fn detect(message: &str) -> Topic {
        if ASBESTOS_RE.is_match(message) {
            Topic::Asbestos
        } else if GRAFFITI_RE.is_match(message) {
            Topic::Graffiti
        } else if BUILDING_RE.is_match(message) {
            Topic::Building
        } else {
            Topic::Unknown
        }
    }
}

/// Order number candidates in a message, in order of appearance
pub fn order_id_candidates(message: &str) -> impl Iterator<Item = &str> {
    ORDER_ID_RE.find_iter(message).map(|m| m.as_str())
}
