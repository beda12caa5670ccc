//! Property tests for junk line removal.

use proptest::prelude::*;

use nb_to_blog::strip_junk_lines;

const MARKER: &str = "HBox(children=(FloatProgress(";

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: all and only marker lines are removed; the rest is byte-identical.
    #[test]
    fn property_sanitize_removes_only_marker_lines(
        lines in proptest::collection::vec(
            ("[^\n]{0,30}", any::<bool>(), prop_oneof![Just("\n"), Just("\r\n")]),
            0..=12,
        ),
    ) {
        let mut doc = String::new();
        let mut expected = String::new();
        let mut junk = 0;
        for (text, is_junk, ending) in &lines {
            let text = text.replace(MARKER, "");
            let line = if *is_junk {
                format!("{}{}value=0){}", text, MARKER, ending)
            } else {
                format!("{}{}", text, ending)
            };
            doc.push_str(&line);
            if *is_junk {
                junk += 1;
            } else {
                expected.push_str(&line);
            }
        }

        let (kept, removed) = strip_junk_lines(&doc, &[MARKER]);
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(removed, junk);
    }
}
