use regex::Regex;

/// The decimal-number shape shared by every numeric stage: optional sign,
/// digits, optional fractional part. Signs are consumed even when they are
/// really range hyphens ("400-750" strips to nothing), which is exactly what
/// the suffix-stripping rules rely on.
pub fn number_re() -> &'static Regex {
    regex!(r"[+-]?\d*\.?\d+")
}

/// First decimal number in `text`, if any.
pub fn first_number(text: &str) -> Option<f64> {
    number_re().find(text).and_then(|m| parse_decimal(m.as_str()))
}

/// Remove ALL numeric substrings from `text` and trim the remainder. Used to
/// recover the non-numeric suffix of a range segment ("750 yr" -> "yr").
pub fn strip_numbers(text: &str) -> String {
    number_re().replace_all(text, "").trim().to_string()
}

/// Parse a decimal number string into `f64`.
pub fn parse_decimal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_number_takes_first_match() {
        assert_eq!(first_number("abc 12.5 and 7"), Some(12.5));
        assert_eq!(first_number("400-750 yr"), Some(400.0));
        assert_eq!(first_number("-3.5 ka"), Some(-3.5));
        assert_eq!(first_number("no digits"), None);
        assert_eq!(first_number("+"), None);
    }

    #[test]
    fn strip_numbers_removes_every_numeric_substring() {
        assert_eq!(strip_numbers("750 yr"), "yr");
        // The hyphen is consumed as the sign of the second number.
        assert_eq!(strip_numbers("400-750 yr"), "yr");
        assert_eq!(strip_numbers("yr b.p."), "yr b.p.");
        assert_eq!(strip_numbers("1.5"), "");
    }
}
