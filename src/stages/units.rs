//! Geological unit conversion: mega-annum ("ma") values become plain years.

use crate::stages::helpers::parse_decimal;

const YEARS_PER_MEGA_ANNUM: f64 = 1_000_000.0;

/// Convert the FIRST number followed by "ma" into years and replace the
/// ENTIRE working text with that number. Everything else in the string is
/// discarded, including a `+` era flag produced earlier; "a.d. 2.5 ma"
/// therefore resolves as a years-ago value. Intentional, observed behavior.
pub fn mega_annum(text: &str) -> Option<String> {
    let caps = regex!(r"([+-]?\d*\.?\d+)\s*ma").captures(text)?;
    let value = parse_decimal(caps.get(1)?.as_str())?;
    Some(format!("{}", value * YEARS_PER_MEGA_ANNUM))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ma_value_replaces_whole_text() {
        assert_eq!(mega_annum("2.5 ma").unwrap(), "2500000");
        assert_eq!(mega_annum("0.01 ma old flows").unwrap(), "10000");
    }

    #[test]
    fn era_flag_is_discarded_with_the_rest_of_the_text() {
        assert_eq!(mega_annum("+ 2.5 ma").unwrap(), "2500000");
    }

    #[test]
    fn matches_ma_without_a_word_boundary() {
        // No trailing boundary check: "ma" inside a longer word still fires.
        assert_eq!(mega_annum("5 mauna loa flows").unwrap(), "5000000");
    }

    #[test]
    fn no_ma_suffix_is_a_no_op() {
        assert_eq!(mega_annum("575 yr"), None);
        assert_eq!(mega_annum("ma with no number"), None);
    }
}
