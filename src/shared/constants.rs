/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Orders shown in the dashboard's "recent orders" list
pub const RECENT_ORDERS_LIMIT: usize = 3;

/// Longest shift a single time entry may record
pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;

// =============================================================================
// SETTINGS KEYS
// =============================================================================

/// Key prefix for a user's language/theme preferences
pub const PREFERENCES_KEY_PREFIX: &str = "preferences";

/// Key prefix for a user's photo export settings
pub const PHOTO_EXPORT_KEY_PREFIX: &str = "photo_export";
