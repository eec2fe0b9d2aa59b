//! Integration tests for literal matching
//!
//! A literal either accounts for the front of the input or rejects, and the
//! resulting completion splits its text into the typed prefix and the
//! suggested rest. These tests pin down that split across input lengths,
//! multi-byte text, and the rejection cases.

use rstest::rstest;
use serde_json::json;
use typeahead::testing::assert_completions;
use typeahead::{literal, GrammarNode};

#[rstest]
#[case::partial_input("right", "r", &[("r", true), ("ight", false)])]
#[case::empty_input("right", "", &[("right", false)])]
#[case::exact_match("right", "right", &[("right", true)])]
#[case::space_inside_text("right also", "right a", &[("right a", true), ("lso", false)])]
#[case::multibyte_boundary("éclair", "é", &[("é", true), ("clair", false)])]
fn test_literal_word_split(
    #[case] text: &str,
    #[case] input: &str,
    #[case] expected: &[(&str, bool)],
) {
    let grammar: GrammarNode = literal(text).into();

    assert_completions(grammar.completions(input).unwrap())
        .count(1)
        .completion(0, |c| {
            c.words(expected);
        });
}

#[rstest]
#[case::diverging_first_character("right", "wrong")]
#[case::diverging_after_prefix("right", "rx")]
#[case::leftover_input_unconsumed("right", "rightx")]
#[case::multibyte_diverging("éclair", "e")]
fn test_literal_rejection(#[case] text: &str, #[case] input: &str) {
    let grammar: GrammarNode = literal(text).into();

    assert_completions(grammar.completions(input).unwrap()).empty();
}

#[test]
fn test_text_views_split_typed_and_suggested() {
    let grammar: GrammarNode = literal("right").into();

    assert_completions(grammar.completions("ri").unwrap())
        .count(1)
        .completion(0, |c| {
            c.text("right").typed("ri").suggested("ght");
        });
}

#[test]
fn test_value_and_id_reach_the_completion() {
    let grammar: GrammarNode = literal("right").value(json!("testValue")).id("key").into();

    assert_completions(grammar.completions("r").unwrap())
        .count(1)
        .completion(0, |c| {
            c.text("right").value(json!({"key": "testValue"}));
        });
}

#[test]
fn test_value_without_id_stays_bare() {
    let grammar: GrammarNode = literal("right").value(json!("testValue")).into();

    assert_completions(grammar.completions("r").unwrap())
        .count(1)
        .completion(0, |c| {
            c.value(json!("testValue"));
        });
}

#[test]
fn test_empty_text_completes_empty_input_with_no_words() {
    let grammar: GrammarNode = literal("").into();

    assert_completions(grammar.completions("").unwrap())
        .count(1)
        .completion(0, |c| {
            c.text("").no_value();
        });
}
