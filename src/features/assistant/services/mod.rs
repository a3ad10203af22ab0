mod assistant_service;

pub use assistant_service::AssistantService;
