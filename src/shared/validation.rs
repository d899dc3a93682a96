use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating URL slugs
    /// Must be lowercase alphanumeric runs joined by single hyphens
    /// - Valid: "gift-boxes", "resin123", "resin-coasters-trays"
    /// - Invalid: "-gift", "gift-", "gift--boxes", "Gift", "gift_boxes"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    static ref NON_SLUG_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derive a URL slug from a display name.
///
/// Lower-cases the name, collapses every run of characters outside `[a-z0-9]`
/// into one hyphen and trims hyphens from both ends. Names without any ASCII
/// alphanumerics produce an empty string.
pub fn generate_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Reject strings that are empty or whitespace only
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
