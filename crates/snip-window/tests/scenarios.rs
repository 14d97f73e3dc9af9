//! End-to-end window selection scenarios.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use snip_window::{WindowError, WindowPolicy, select_window};

#[test]
fn second_title_pairs_with_name() {
    let doc = "herr dr. herr dr. schlaenker, come quick!";
    let window = select_window(doc, &["Dr", "Schlaenker"], &WindowPolicy::default()).unwrap();

    assert_eq!(window.left_match, 14);
    assert_eq!(window.right_match, 18);
    assert_eq!(window.span, 4);
    assert_eq!(window.excerpt(doc), doc);
}

#[test]
fn plural_suffix_finds_term() {
    let doc = "These...are...good -- and tasty! -- apples.";
    let window = select_window(doc, &["tasty", "apple"], &WindowPolicy::default()).unwrap();
    assert_eq!(&doc[window.right_match..window.right_match + 6], "apples");
}

#[test]
fn substring_only_is_not_found() {
    let err = select_window(
        "the catatonic patient stared",
        &["cat"],
        &WindowPolicy::default(),
    )
    .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn single_term_centers_on_first_occurrence() {
    let filler = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do ";
    let doc = format!("{filler}{filler}target {filler}target {filler}");
    let window = select_window(&doc, &["target"], &WindowPolicy::default()).unwrap();

    assert_eq!(window.span, 0);
    assert_eq!(window.left_match, doc.find("target").unwrap());
    assert!(window.excerpt(&doc).starts_with("elit sed do target"));
}

#[test]
fn empty_query_is_rejected() {
    let terms: [&str; 0] = [];
    let err = select_window("anything at all", &terms, &WindowPolicy::default()).unwrap_err();
    assert!(matches!(err, WindowError::EmptyQuery));
}

#[test]
fn term_order_does_not_change_unique_minimum() {
    let doc = "alpha beta gamma beta alpha";
    let forward = select_window(doc, &["alpha", "beta"], &WindowPolicy::default()).unwrap();
    let reverse = select_window(doc, &["beta", "alpha"], &WindowPolicy::default()).unwrap();

    assert_eq!((forward.left_match, forward.right_match), (17, 22));
    assert_eq!(forward, reverse);
}
