//! Plain string cleanup: casing, filler deletion, the era marker, whitespace.

/// Substrings deleted outright from the (already lowercased) text. Deleted,
/// not replaced with a space: "younger than 80 yr" becomes " 80 yr".
const FILLER: [&str; 5] = ["about", "younger than", "probably", ",", "age"];

pub fn lowercase_trim(text: &str) -> Option<String> {
    Some(text.to_lowercase().trim().to_string())
}

/// Delete filler words and punctuation that carry no numeric information.
/// Applied sequentially to the evolving string.
pub fn strip_filler(text: &str) -> Option<String> {
    let mut out = text.to_string();
    for filler in FILLER {
        out = out.replace(filler, "");
    }
    Some(out)
}

/// Substitute the calendar-era marker `a.d.` with `+`. The `+` survives in
/// the working text and flips the sign logic during final resolution.
pub fn era_marker(text: &str) -> Option<String> {
    Some(text.replace("a.d.", "+"))
}

pub fn collapse_whitespace(text: &str) -> Option<String> {
    Some(regex!(r"\s+").replace_all(text, " ").trim().to_string())
}
