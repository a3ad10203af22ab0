use std::borrow::Cow;

use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace.
///
/// `length(min = 1)` alone lets `"   "` through, which the portal treats as
/// a missing value (material name, diary text, ...).
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}

/// Accepts only `http://` and `https://` URLs; pair with `url` for the
/// syntax check.
pub fn http_scheme(value: &str) -> Result<(), ValidationError> {
    let lower = value.trim().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Ok(());
    }
    let mut error = ValidationError::new("http_scheme");
    error.message = Some(Cow::Borrowed("must be an http or https URL"));
    Err(error)
}
