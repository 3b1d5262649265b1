//! Vehicle-name normalization and numeric-string validation.
//!
//! All raw user input passes through here before it reaches the store:
//! names are canonicalized to a single upper-cased form, and mileage
//! strings are screened by a predicate that never panics.

/// Canonicalize a vehicle name.
///
/// Upper-cases the input; an absent name maps to the empty string, which
/// callers treat as "no vehicle provided". Whitespace is preserved, so
/// trimming is the caller's job.
pub fn normalize(name: Option<&str>) -> String {
    name.unwrap_or_default().to_uppercase()
}

/// Check whether `text` is a plain decimal number.
///
/// Accepts digit-only strings outright. Anything else must parse as a
/// finite number whose canonical decimal rendering occurs within the
/// original text; containment rather than equality is what lets
/// leading-zero decimals like `"0112358.13"` through. Scientific
/// notation, thousands separators, and non-finite values all fail.
/// Malformed input maps to `false`, never a panic.
pub fn is_valid_number(text: &str) -> bool {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => text.contains(&canonical_decimal(value)),
        _ => false,
    }
}

/// Canonical decimal rendering: integral values keep a `.0` suffix, so
/// bare trailing-dot input (`"1."`) does not match its own parse.
fn canonical_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_upper_cases() {
        assert_eq!(normalize(Some("blue car")), "BLUE CAR");
        assert_eq!(normalize(Some("Blue Car")), "BLUE CAR");
        assert_eq!(normalize(Some("BLUE CAR")), "BLUE CAR");
    }

    #[test]
    fn test_normalize_absent_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn test_normalize_preserves_whitespace() {
        assert_eq!(normalize(Some(" blue car ")), " BLUE CAR ");
    }

    #[test]
    fn test_valid_integers() {
        assert!(is_valid_number("0"));
        assert!(is_valid_number("1"));
        assert!(is_valid_number("007"));
        assert!(is_valid_number("112358"));
    }

    #[test]
    fn test_valid_decimals() {
        assert!(is_valid_number("1.0"));
        assert!(is_valid_number("0.1"));
        assert!(is_valid_number("-1.5"));
        assert!(is_valid_number("0112358.13"));
    }

    #[test]
    fn test_rejects_words() {
        assert!(!is_valid_number("pizza"));
        assert!(!is_valid_number("three"));
        assert!(!is_valid_number("12.def"));
    }

    #[test]
    fn test_rejects_malformed_decimals() {
        assert!(!is_valid_number("1..0"));
        assert!(!is_valid_number("1.2.3.5.8.13"));
        assert!(!is_valid_number("1,000.00"));
        assert!(!is_valid_number("1."));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("   "));
        assert!(!is_valid_number(" 1 "));
    }

    #[test]
    fn test_rejects_unlisted_formats() {
        assert!(!is_valid_number("1e5"));
        assert!(!is_valid_number("inf"));
        assert!(!is_valid_number("NaN"));
        // bare negative integers have canonical form "-1.0", which the
        // original text does not contain
        assert!(!is_valid_number("-1"));
    }
}
