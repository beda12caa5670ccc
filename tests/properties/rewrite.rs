//! Property tests for image reference rewriting.

use proptest::prelude::*;

use nb_to_blog::ReferenceRewriter;

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_]{1,12}\\.(png|jpg|svg)").unwrap()
}

fn prose() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 .,:()\\[\\]/_-]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rewriting an already rewritten document changes nothing.
    #[test]
    fn property_rewrite_is_idempotent(
        parts in proptest::collection::vec((prose(), file_name(), any::<bool>()), 0..=6),
    ) {
        let doc: String = parts
            .iter()
            .map(|(text, file, generated)| {
                if *generated {
                    format!("{}\n![png](nb_files/{})\n", text, file)
                } else {
                    format!("{}\n![img](images/{})\n", text, file)
                }
            })
            .collect();

        let rewriter = ReferenceRewriter::new("images", "nb_files", "/assets/img/blog/2020-01-01-p");
        let once = rewriter.rewrite(&doc);
        prop_assert_eq!(rewriter.rewrite(&once), once.clone());
        prop_assert!(!once.contains("](images/"));
        prop_assert!(!once.contains("(nb_files/"));
    }

    /// PROPERTY: every referenced file name survives the rewrite.
    #[test]
    fn property_rewrite_preserves_file_names(file in file_name()) {
        let rewriter = ReferenceRewriter::new("images", "nb_files", "/assets/img/blog/x");
        let out = rewriter.rewrite(&format!("![a](images/{file}) ![b](nb_files/{file})"));
        prop_assert_eq!(
            out,
            format!("![a](/assets/img/blog/x/{file}) ![b](/assets/img/blog/x/nb_files/{file})")
        );
    }
}
