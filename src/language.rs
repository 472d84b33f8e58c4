//! Display names for the ISO 639-1 codes TMDB reports as `original_language`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Placeholder shown when a field has no value
pub const PLACEHOLDER: &str = "—";

static LANGUAGE_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("en", "English"),
        ("hi", "Hindi"),
        ("te", "Telugu"),
        ("ta", "Tamil"),
        ("kn", "Kannada"),
        ("ml", "Malayalam"),
        ("mr", "Marathi"),
        ("bn", "Bengali"),
        ("pa", "Punjabi"),
    ])
});

/// Resolve a language code to a readable name.
///
/// Known codes map to their name, unknown codes are shown uppercased and a
/// missing or blank code becomes [`PLACEHOLDER`]. The lookup never fails.
pub fn language_display_name(code: Option<&str>) -> String {
    let code = code.map(str::trim).unwrap_or_default();
    if code.is_empty() {
        return PLACEHOLDER.to_string();
    }

    match LANGUAGE_NAMES.get(code) {
        Some(name) => (*name).to_string(),
        None => code.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(language_display_name(Some("en")), "English");
        assert_eq!(language_display_name(Some("hi")), "Hindi");
        assert_eq!(language_display_name(Some("pa")), "Punjabi");
    }

    #[test]
    fn test_unknown_code_is_uppercased() {
        assert_eq!(language_display_name(Some("xx")), "XX");
        assert_eq!(language_display_name(Some("fr")), "FR");
    }

    #[test]
    fn test_missing_code_uses_placeholder() {
        assert_eq!(language_display_name(None), PLACEHOLDER);
        assert_eq!(language_display_name(Some("")), PLACEHOLDER);
    }
}
