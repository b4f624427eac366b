//! The ordered rewrite stages of the age-text pipeline.
//!
//! Each stage is a pure string-to-string transform; `get()` returns them in
//! the one order that produces correct results. The ordering is load-bearing:
//! filler words are deleted before the era marker is substituted, range
//! averaging runs on the cleaned text, and the mega-annum stage consumes
//! whatever the range stages produced.

pub mod helpers;
pub mod ranges;
pub mod rewrite;
pub mod units;

#[cfg(test)]
mod tests;

use crate::Stage;

pub fn get() -> Vec<Stage> {
    vec![
        Stage { name: "lowercase + trim", apply: rewrite::lowercase_trim },
        Stage { name: "strip filler words", apply: rewrite::strip_filler },
        Stage { name: "era marker (a.d.)", apply: rewrite::era_marker },
        Stage { name: "collapse whitespace", apply: rewrite::collapse_whitespace },
        Stage { name: "average 'to' range", apply: ranges::average_to_range },
        Stage { name: "average hyphen range", apply: ranges::average_hyphen_range },
        Stage { name: "mega-annum to years", apply: units::mega_annum },
    ]
}
