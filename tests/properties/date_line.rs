//! Property tests for date extraction from the first cell.

use proptest::prelude::*;

use nb_to_blog::{extract_date, NbBlogError};

fn other_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 #:_-]{0,40}")
        .unwrap()
        .prop_filter("not a date line", |s| !s.starts_with("date"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: exactly one well-formed date line yields its date, wherever it sits.
    #[test]
    fn property_single_date_line_is_extracted(
        before in proptest::collection::vec(other_line(), 0..=5),
        after in proptest::collection::vec(other_line(), 0..=5),
        year in 1970i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = format!("{:04}-{:02}-{:02}", year, month, day);
        let mut lines = before.clone();
        lines.push(format!("date: {}", date));
        lines.extend(after);

        let extracted = extract_date(&lines, std::path::Path::new("nb.ipynb")).unwrap();
        prop_assert_eq!(extracted, date);
    }

    /// PROPERTY: two or more date lines are always rejected.
    #[test]
    fn property_multiple_date_lines_are_rejected(
        others in proptest::collection::vec(other_line(), 0..=5),
        extra in 2usize..=4,
    ) {
        let mut lines = others;
        for i in 0..extra {
            lines.push(format!("date: 2020-01-{:02}", i + 1));
        }

        let err = extract_date(&lines, std::path::Path::new("nb.ipynb")).unwrap_err();
        let is_duplicate = matches!(err, NbBlogError::DuplicateDateLine { .. });
        prop_assert!(is_duplicate);
    }

    /// PROPERTY: `extract_date` never panics on arbitrary lines.
    #[test]
    fn property_extract_date_never_panics(
        lines in proptest::collection::vec("(?s).{0,64}", 0..=8)
    ) {
        let _ = extract_date(&lines, std::path::Path::new("nb.ipynb"));
    }
}
