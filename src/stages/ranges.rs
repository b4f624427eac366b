//! Range averaging: "400 to 750 yr" and "400-750 yr" both collapse to a
//! single averaged number followed by the leftover non-numeric suffix text.

use crate::stages::helpers::{first_number, strip_numbers};

/// Split on the FIRST `" to "` and average the first number of each side.
/// No-op when either side lacks a number.
///
/// Only the first number per side feeds the average, but the suffix is the
/// side with ALL numbers stripped; a side with two numbers contributes no
/// digits to the suffix even though only its first number was used.
pub fn average_to_range(text: &str) -> Option<String> {
    let (left, right) = text.split_once(" to ")?;
    let l = first_number(left)?;
    let r = first_number(right)?;

    let mean = (l + r) / 2.0;
    let rebuilt = format!("{} {} {}", mean, strip_numbers(left), strip_numbers(right));
    Some(rebuilt.trim().to_string())
}

/// Split on a hyphen with optional surrounding whitespace and average the
/// first number of each side. Fires ONLY when the split yields exactly two
/// parts; zero or two-plus hyphens leave the text untouched.
pub fn average_hyphen_range(text: &str) -> Option<String> {
    let parts: Vec<&str> = regex!(r"\s*-\s*").split(text).collect();
    let &[left, right] = parts.as_slice() else {
        return None;
    };

    let l = first_number(left)?;
    let r = first_number(right)?;

    let mean = (l + r) / 2.0;
    let suffix = format!("{} {}", strip_numbers(left), strip_numbers(right));
    Some(format!("{} {}", mean, suffix.trim()).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_range_averages_both_sides() {
        assert_eq!(average_to_range("400 to 750 yr").unwrap(), "575  yr");
        assert_eq!(average_to_range("1.5 to 2.5 ma").unwrap(), "2  ma");
    }

    #[test]
    fn to_range_splits_on_first_occurrence_only() {
        // Right side keeps its own " to " text (minus the numbers).
        assert_eq!(average_to_range("1 to 2 to 3").unwrap(), "1.5  to");
    }

    #[test]
    fn to_range_requires_numbers_on_both_sides() {
        assert_eq!(average_to_range("early to middle holocene"), None);
        assert_eq!(average_to_range("400 to present"), None);
        assert_eq!(average_to_range("no separator here"), None);
    }

    #[test]
    fn hyphen_range_averages_exactly_two_parts() {
        assert_eq!(average_hyphen_range("400-750 yr").unwrap(), "575 yr");
        assert_eq!(average_hyphen_range("400 - 750 yr").unwrap(), "575 yr");
    }

    #[test]
    fn hyphen_range_skips_other_split_counts() {
        assert_eq!(average_hyphen_range("400-750-1000 yr"), None);
        assert_eq!(average_hyphen_range("575 yr"), None);
    }

    #[test]
    fn hyphen_range_requires_numbers_on_both_sides() {
        assert_eq!(average_hyphen_range("pre-historic"), None);
        assert_eq!(average_hyphen_range("400-present"), None);
    }
}
