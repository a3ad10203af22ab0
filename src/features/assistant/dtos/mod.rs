mod assistant_dto;

pub use assistant_dto::{ChatMessageDto, ChatRequestDto, LanguageQuery, Sender, TipsResponseDto};
