//! Field validators shared by several DTOs.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

static PLAIN_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[a-zA-Z0-9 .,'"-]*$"#).expect("valid plain text regex"));

static EXPERIENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}$").expect("valid experience regex"));

/// Years of experience above this are stored as `"15+"`.
pub const EXPERIENCE_CAP: u32 = 15;

/// Names and free-text messages: letters, digits, spaces and `.,'"-`.
pub fn validate_plain_text(value: &str) -> Result<(), ValidationError> {
    if PLAIN_TEXT_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("plain_text")
            .with_message("contains characters that are not allowed".into()))
    }
}

/// One or two digits.
pub fn validate_experience(value: &str) -> Result<(), ValidationError> {
    if EXPERIENCE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("experience")
            .with_message("experience must be a number of years (0-99)".into()))
    }
}

/// Caps an already validated experience value.
pub fn normalize_experience(value: &str) -> String {
    match value.parse::<u32>() {
        Ok(years) if years > EXPERIENCE_CAP => format!("{EXPERIENCE_CAP}+"),
        Ok(years) => years.to_string(),
        Err(_) => value.to_string(),
    }
}

/// Trims a string and drops it when nothing is left.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert!(validate_plain_text("Jane O'Neil-Smith, Jr.").is_ok());
        assert!(validate_plain_text("").is_ok());
        assert!(validate_plain_text("<script>").is_err());
        assert!(validate_plain_text("hello!").is_err());
    }

    #[test]
    fn test_experience() {
        assert!(validate_experience("7").is_ok());
        assert!(validate_experience("07").is_ok());
        assert!(validate_experience("100").is_err());
        assert!(validate_experience("-1").is_err());
        assert_eq!(normalize_experience("07"), "7");
        assert_eq!(normalize_experience("15"), "15");
        assert_eq!(normalize_experience("16"), "15+");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" a ".into())), Some("a".into()));
        assert_eq!(non_blank(None), None);
    }
}
