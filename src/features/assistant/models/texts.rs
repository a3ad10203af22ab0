use crate::features::orders::models::{OrderStatus, OrderType};
use crate::features::settings::models::Language;

/// Fixed assistant wording for one language
pub struct AssistantTexts {
    pub greeting: &'static str,
    pub asbestos: &'static str,
    pub graffiti: &'static str,
    pub building: &'static str,
    pub fallback: &'static str,
    pub help_intro: &'static str,
    pub tips: [&'static str; 3],
    pub order_summary_template: &'static str,
}

impl AssistantTexts {
    pub fn for_language(language: Language) -> &'static AssistantTexts {
        match language {
            Language::Sv => &SWEDISH,
            Language::En => &ENGLISH,
        }
    }
}

static SWEDISH: AssistantTexts = AssistantTexts {
    greeting: "Hej! Jag är din AI-assistent. Hur kan jag hjälpa dig idag? Du kan fråga mig om asbestsanering, rengöringstekniker eller vilket städmaterial som passar bäst för olika situationer.",
    asbestos: "Vid asbestsanering är säkerheten viktigast. Använd alltid korrekt skyddsutrustning: andningsskydd med P3-filter, heltäckande engångsoverall, handskar och skoskydd. Arbetsområdet måste förslutas ordentligt och undertryck skapas. Allt material måste fuktas före hantering för att minimera dammspridning. Asbestavfall ska paketeras i godkända, märkta behållare och transporteras till särskild avfallsanläggning. Kom ihåg att asbestsanering kräver särskild behörighet och tillstånd från Arbetsmiljöverket.",
    graffiti: "För effektiv klottersanering, identifiera först ytans material (betong, tegel, metall, etc.) och vilken typ av färg som använts. För porösa ytor som tegel och betong, använd alkaliska borttagningsmedel eller specialiserade gelbaserade produkter. På släta, icke-porösa ytor fungerar ofta lösningsmedelsbaserade produkter bäst. Vid användning av högtryckstvätt, justera alltid trycket efter underlaget för att undvika skador. Miljövänliga alternativ finns också tillgängliga, särskilt för känsliga miljöer eller historiska byggnader. Kom ihåg att använda korrekt skyddsutrustning: handskar, skyddsglasögon och ibland andningsskydd.",
    building: "Byggstädning bör genomföras i etapper, med grovstädning först för att avlägsna större skräp och byggdamm, följt av en finstädning. Använd industridammsugare med HEPA-filter för effektiv dammhantering. För golvytor, tillämpa lämpliga rengöringsmetoder baserat på materialet, olika metoder krävs för betong, keramik, trä eller linoleum. Torka av alla ytor inklusive fönsterkarmar, eluttag och belysningsarmaturer. För svåråtkomliga platser som ventilationskanaler, använd specialverktyg eller ta hjälp av fackmän. Avsluta med en kvalitetskontroll genom att inspektera alla utrymmen i bra belysning.",
    fallback: "Tack för din fråga. För att ge dig det bästa svaret skulle jag behöva mer specifik information om vilken typ av rengöring du är intresserad av. Vänligen specificera om det gäller asbestsanering, byggstädning, klottersanering eller annan typ av städtjänst, så kan jag ge dig mer detaljerad information.",
    help_intro: "AI-assistenten kan hjälpa dig med:",
    tips: [
        "Säkerhetsrutiner för hantering av asbest",
        "Rengöringstekniker för olika ytor",
        "Materialrekommendationer",
    ],
    order_summary_template: "assistant/order_summary.sv.jinja",
};

static ENGLISH: AssistantTexts = AssistantTexts {
    greeting: "Hi! I'm your AI assistant. How can I help you today? You can ask me about asbestos removal, cleaning techniques or which cleaning materials suit different situations best.",
    asbestos: "Safety comes first in asbestos removal. Always wear proper protective equipment: a respirator with a P3 filter, full-body disposable coveralls, gloves and shoe covers. The work area must be properly sealed and kept under negative pressure. Wet all material before handling it to keep dust down. Asbestos waste must be packed in approved, labelled containers and taken to a dedicated waste facility. Remember that asbestos removal requires special certification and a permit from the Swedish Work Environment Authority.",
    graffiti: "For effective graffiti removal, first identify the surface material (concrete, brick, metal, etc.) and the type of paint used. On porous surfaces such as brick and concrete, use alkaline removers or specialised gel-based products. On smooth, non-porous surfaces, solvent-based products usually work best. When using a pressure washer, always adjust the pressure to the surface to avoid damage. Environmentally friendly alternatives are also available, especially for sensitive environments or historic buildings. Remember to wear proper protection: gloves, safety glasses and sometimes a respirator.",
    building: "Construction cleaning should be done in stages: a rough clean first to remove larger debris and construction dust, followed by a fine clean. Use industrial vacuum cleaners with HEPA filters for effective dust control. For floors, choose the cleaning method by material, since concrete, ceramic, wood and linoleum each need different treatment. Wipe down every surface including window frames, sockets and light fittings. For hard-to-reach places such as ventilation ducts, use special tools or bring in specialists. Finish with a quality check, inspecting every room in good lighting.",
    fallback: "Thank you for your question. To give you the best answer I need more specific information about the kind of cleaning you are interested in. Please say whether it concerns asbestos removal, construction cleaning, graffiti removal or another cleaning service, and I can give you more detailed information.",
    help_intro: "AI Assistant can help you with:",
    tips: [
        "Safety procedures for asbestos handling",
        "Cleaning techniques for different surfaces",
        "Material recommendations",
    ],
    order_summary_template: "assistant/order_summary.en.jinja",
};

/// Display name of an order type
pub fn order_type_label(order_type: OrderType, language: Language) -> &'static str {
    match (language, order_type) {
        (Language::Sv, OrderType::Asbestos) => "Asbestsanering",
        (Language::Sv, OrderType::Building) => "Byggrengöring",
        (Language::Sv, OrderType::Graffiti) => "Klottersanering",
        (Language::Sv, OrderType::General) => "Allmän städning",
        (Language::En, OrderType::Asbestos) => "Asbestos Removal",
        (Language::En, OrderType::Building) => "Building Cleaning",
        (Language::En, OrderType::Graffiti) => "Graffiti Removal",
        (Language::En, OrderType::General) => "General Cleaning",
    }
}

/// Display name of an order status
pub fn order_status_label(status: OrderStatus, language: Language) -> &'static str {
    match (language, status) {
        (Language::Sv, OrderStatus::Pending) => "Väntande",
        (Language::Sv, OrderStatus::InProgress) => "Pågående",
        (Language::Sv, OrderStatus::Completed) => "Slutförd",
        (Language::Sv, OrderStatus::Cancelled) => "Avbruten",
        (Language::En, OrderStatus::Pending) => "Pending",
        (Language::En, OrderStatus::InProgress) => "In Progress",
        (Language::En, OrderStatus::Completed) => "Completed",
        (Language::En, OrderStatus::Cancelled) => "Cancelled",
    }
}
