mod reply_rule;
mod texts;

pub use reply_rule::{order_id_candidates, Topic};
pub use texts::{order_status_label, order_type_label, AssistantTexts};
