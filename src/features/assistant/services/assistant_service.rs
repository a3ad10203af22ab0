use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::features::assistant::dtos::{ChatMessageDto, TipsResponseDto};
use crate::features::assistant::models::{
    order_id_candidates, order_status_label, order_type_label, AssistantTexts, Topic,
};
use crate::features::orders::models::Order;
use crate::features::settings::models::Language;
use crate::modules::store::{OrderStore, SharedStore};
use crate::shared::templates::render_template;

/// Canned-response assistant that also knows the orders in the store
pub struct AssistantService {
    store: SharedStore,
}

impl AssistantService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn greeting(&self, language: Language) -> ChatMessageDto {
        ChatMessageDto::from_ai(AssistantTexts::for_language(language).greeting)
    }

    pub fn tips(&self, language: Language) -> TipsResponseDto {
        let texts = AssistantTexts::for_language(language);
        TipsResponseDto {
            intro: texts.help_intro.to_string(),
            tips: texts.tips.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Answer a user message.
    ///
    /// A known order number wins over keyword topics; anything else gets the
    /// request for more detail.
    pub async fn reply(&self, message: &str, language: Language) -> Result<ChatMessageDto> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::BadRequest("Message must not be empty".to_string()));
        }

        let texts = AssistantTexts::for_language(language);

        let summary = {
            let store = self.store.read().await;
            order_id_candidates(message)
                .find_map(|id| store.order_by_id(id))
                .map(|order| self.order_summary(&store, &order, language, texts))
        };

        if let Some(summary) = summary {
            return Ok(ChatMessageDto::from_ai(summary?));
        }

        let topic = Topic::detect(message);
        tracing::debug!("Assistant reply: topic={:?}, lang={:?}", topic, language);

        let text = match topic {
            Topic::Asbestos => texts.asbestos,
            Topic::Graffiti => texts.graffiti,
            Topic::Building => texts.building,
            Topic::Unknown => texts.fallback,
        };

        Ok(ChatMessageDto::from_ai(text))
    }

    fn order_summary(
        &self,
        store: &OrderStore,
        order: &Order,
        language: Language,
        texts: &AssistantTexts,
    ) -> Result<String> {
        let hours: f64 = store
            .time_entries_by_order(&order.id)
            .iter()
            .map(|t| t.hours)
            .sum();

        let materials: Vec<String> = store
            .materials_by_order(&order.id)
            .into_iter()
            .map(|m| format!("{} ({} {})", m.name, m.quantity, m.unit))
            .collect();

        let diary_count = store.diary_entries_by_order(&order.id).len();

        tracing::debug!("Assistant reply: order summary for {}", order.id);

        render_template(
            texts.order_summary_template,
            context! {
                order => context! {
                    id => &order.id,
                    client_name => &order.client_name,
                    type_label => order_type_label(order.order_type, language),
                    status_label => order_status_label(order.status, language),
                    address => &order.address,
                    date => order.date.to_string(),
                    description => &order.description,
                },
                hours => format_hours(hours),
                materials => materials,
                diary_count => diary_count,
            },
        )
        .map_err(|e| AppError::Internal(e.to_string()))
    }
}

/// Hours as shown in replies: `16`, `7.5`, `0.25`; `None` when nothing is logged
fn format_hours(hours: f64) -> Option<String> {
    let rounded = (hours * 100.0).round() / 100.0;
    (rounded > 0.0).then(|| rounded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::seeded_store;

    fn service() -> AssistantService {
        AssistantService::new(seeded_store())
    }

    #[tokio::test]
    async fn test_keyword_replies() {
        let service = service();

        let reply = service.reply("Hur jobbar man med asbest?", Language::Sv).await.unwrap();
        assert!(reply.text.starts_with("Vid asbestsanering"));

        let reply = service.reply("graffiti tips", Language::En).await.unwrap();
        assert!(reply.text.starts_with("For effective graffiti removal"));

        let reply = service.reply("Byggstädning?", Language::Sv).await.unwrap();
        assert!(reply.text.starts_with("Byggstädning bör"));

        let reply = service.reply("Hej", Language::Sv).await.unwrap();
        assert!(reply.text.starts_with("Tack för din fråga"));
    }

    #[tokio::test]
    async fn test_known_order_id_gets_summary() {
        let reply = service()
            .reply("Vad gäller för order 1001 med asbest?", Language::Sv)
            .await
            .unwrap();

        assert!(reply.text.starts_with("Order 1001 för Volvo AB"));
        assert!(reply.text.contains("Status: Pågående"));
        assert!(reply.text.contains("Loggad tid hittills: 16 timmar."));
        assert!(reply.text.contains("Skyddsdräkt (5 st)"));
        assert!(reply.text.contains("Dagboken har 2 anteckningar."));
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(16.0).as_deref(), Some("16"));
        assert_eq!(format_hours(7.5).as_deref(), Some("7.5"));
        assert_eq!(format_hours(0.1 + 0.2).as_deref(), Some("0.3"));
        assert_eq!(format_hours(0.0), None);
    }

    #[tokio::test]
    async fn test_unknown_order_id_falls_through_to_keywords() {
        let reply = service()
            .reply("order 9999 och klotter", Language::Sv)
            .await
            .unwrap();
        assert!(reply.text.starts_with("För effektiv klottersanering"));
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        assert!(matches!(
            service().reply("   ", Language::Sv).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_greeting_and_tips_follow_language() {
        let service = service();
        assert!(service.greeting(Language::Sv).text.starts_with("Hej!"));
        assert!(service.greeting(Language::En).text.starts_with("Hi!"));

        let tips = service.tips(Language::En);
        assert_eq!(tips.tips.len(), 3);
        assert_eq!(tips.tips[0], "Safety procedures for asbestos handling");
    }
}
