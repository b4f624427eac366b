use crate::{normalize, normalize_opt};

#[test]
fn age_examples_matching() {
    // Array of (expected_value, input_string)
    let cases: Vec<(Option<i64>, &str)> = vec![
        // Absent / unparseable text
        (None, ""),
        (None, "   "),
        (None, "holocene"),
        (None, "age unknown"),
        (None, "pleistocene to holocene"),
        // Plain years-before-present
        (Some(1920), "80 yr"),
        (Some(1920), "younger than 80 yr"),
        (Some(1900), "about 100 yr B.P."),
        (Some(800), "1,200 yr B.P."),
        (Some(500), "probably about 1500"),
        // Calendar-era values keep their sign
        (Some(1200), "A.D. 1200"),
        (Some(1200), "a.d. 1200"),
        (Some(1950), "A.D. 1950"),
        // "to" ranges average the first number of each side
        (Some(1425), "400 to 750 yr"),
        (Some(1425), "about 400 to 750 yr B.P."),
        // Hyphen ranges average exactly two parts
        (Some(1425), "400-750 yr"),
        (Some(1425), "about 400-750 yr"),
        (Some(1425), "About 400-750 yr B.P."),
        (Some(1425), "400 - 750 yr"),
        // Three-part hyphen splits skip averaging; the first number wins
        (Some(1600), "400-750-1000 yr"),
        // Mega-annum conversion goes deep-time
        (Some(-2500000), "2.5 ma"),
        (Some(-2500000), "2.5 Ma"),
        (Some(-10000000), "10 Ma"),
        (Some(-2000000), "1.5 to 2.5 Ma"),
        (Some(-1500000), "1-2 Ma"),
        // Era flag destroyed by the mega-annum rewrite (observed quirk)
        (Some(-2500000), "A.D. 2.5 Ma"),
        // Era flag survives hyphen averaging via the suffix text
        (Some(1100), "A.D. 1000-1200"),
        // Deep-time threshold: 80,000 years ago is NOT converted
        (Some(-80000), "80000 yr B.P."),
        (Some(-77999), "79999 yr B.P."),
        (Some(-150000), "150,000 yr B.P."),
    ];

    for (expected, input) in cases {
        assert_eq!(normalize(input), expected, "normalize('{}')", input);
    }

    assert_eq!(normalize_opt(None), None);
    assert_eq!(normalize_opt(Some("about 400-750 yr")), Some(1425));
}
