use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::assistant::{dtos as assistant_dtos, handlers as assistant_handlers};
use crate::features::auth;
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::diary::{dtos as diary_dtos, handlers as diary_handlers};
use crate::features::materials::{dtos as materials_dtos, handlers as materials_handlers};
use crate::features::orders::{
    dtos as orders_dtos, handlers as orders_handlers, models as orders_models,
};
use crate::features::photos::{dtos as photos_dtos, handlers as photos_handlers};
use crate::features::settings::{
    dtos as settings_dtos, handlers as settings_handlers, models as settings_models,
};
use crate::features::time_entries::{dtos as time_entries_dtos, handlers as time_entries_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        // Orders
        orders_handlers::list_orders,
        orders_handlers::get_order,
        orders_handlers::update_order_status,
        // Materials
        materials_handlers::list_materials,
        materials_handlers::create_material,
        // Time entries
        time_entries_handlers::list_time_entries,
        time_entries_handlers::get_total_hours,
        time_entries_handlers::create_time_entry,
        // Diary
        diary_handlers::list_diary_entries,
        diary_handlers::create_diary_entry,
        // Photos
        photos_handlers::list_photos,
        photos_handlers::create_photo,
        photos_handlers::delete_photo,
        photos_handlers::export_photo,
        // Dashboard
        dashboard_handlers::get_summary,
        // Assistant
        assistant_handlers::get_greeting,
        assistant_handlers::chat,
        assistant_handlers::get_tips,
        // Settings
        settings_handlers::get_preferences,
        settings_handlers::update_preferences,
        settings_handlers::reset_preferences,
        settings_handlers::get_photo_export_settings,
        settings_handlers::update_photo_export_settings,
        settings_handlers::reset_photo_export_settings,
    ),
    components(
        schemas(
            Meta,
            // Auth
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::AuthUserDto,
            // Orders
            orders_models::OrderType,
            orders_models::OrderStatus,
            orders_models::Coordinates,
            orders_dtos::OrderResponseDto,
            orders_dtos::UpdateOrderStatusDto,
            // Materials
            materials_dtos::MaterialResponseDto,
            materials_dtos::CreateMaterialDto,
            // Time entries
            time_entries_dtos::TimeEntryResponseDto,
            time_entries_dtos::CreateTimeEntryDto,
            time_entries_dtos::TotalHoursDto,
            // Diary
            diary_dtos::DiaryEntryResponseDto,
            diary_dtos::CreateDiaryEntryDto,
            // Photos
            photos_dtos::PhotoResponseDto,
            photos_dtos::CreatePhotoDto,
            photos_dtos::DeletePhotoResponseDto,
            photos_dtos::PhotoExportResultDto,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            // Assistant
            assistant_dtos::Sender,
            assistant_dtos::ChatMessageDto,
            assistant_dtos::ChatRequestDto,
            assistant_dtos::TipsResponseDto,
            // Settings
            settings_models::Language,
            settings_models::Theme,
            settings_models::Preferences,
            settings_dtos::PhotoExportSettingsResponseDto,
            settings_dtos::UpdatePhotoExportSettingsDto,
            // Generic response wrappers
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::AuthUserDto>,
            ApiResponse<orders_dtos::OrderResponseDto>,
            ApiResponse<Vec<orders_dtos::OrderResponseDto>>,
            ApiResponse<materials_dtos::MaterialResponseDto>,
            ApiResponse<Vec<materials_dtos::MaterialResponseDto>>,
            ApiResponse<time_entries_dtos::TimeEntryResponseDto>,
            ApiResponse<Vec<time_entries_dtos::TimeEntryResponseDto>>,
            ApiResponse<time_entries_dtos::TotalHoursDto>,
            ApiResponse<diary_dtos::DiaryEntryResponseDto>,
            ApiResponse<Vec<diary_dtos::DiaryEntryResponseDto>>,
            ApiResponse<photos_dtos::PhotoResponseDto>,
            ApiResponse<Vec<photos_dtos::PhotoResponseDto>>,
            ApiResponse<photos_dtos::DeletePhotoResponseDto>,
            ApiResponse<photos_dtos::PhotoExportResultDto>,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            ApiResponse<assistant_dtos::ChatMessageDto>,
            ApiResponse<assistant_dtos::TipsResponseDto>,
            ApiResponse<settings_models::Preferences>,
            ApiResponse<settings_dtos::PhotoExportSettingsResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Sign-in and current user"),
        (name = "orders", description = "Work orders"),
        (name = "materials", description = "Materials used per order"),
        (name = "time-entries", description = "Hours logged per order"),
        (name = "diary", description = "Work diary per order"),
        (name = "photos", description = "Order photos and photo export"),
        (name = "Dashboard", description = "Order overview"),
        (name = "assistant", description = "Field assistant with canned advice"),
        (name = "settings", description = "Per-user preferences and photo export settings"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Field Service API",
        version = "0.1.0",
        description = "API documentation for the field service order portal",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
