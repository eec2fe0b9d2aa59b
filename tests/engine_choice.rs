//! Integration tests for choice alternatives
//!
//! A choice evaluates every alternative against the same input and flattens
//! their completions in declaration order. These tests cover the union and
//! rejection behavior plus how values flow: adopted from the matching
//! alternative, overridden by the choice's own value, and nested under ids.

use serde_json::json;
use typeahead::testing::assert_completions;
use typeahead::{choice, literal, sequence, GrammarNode};

#[test]
fn test_one_matching_alternative_surfaces() {
    let grammar: GrammarNode =
        choice(vec![literal("right").into(), literal("wrong").into()]).into();

    assert_completions(grammar.completions("r").unwrap())
        .count(1)
        .completion(0, |c| {
            c.words(&[("r", true), ("ight", false)]);
        });
}

#[test]
fn test_matching_alternatives_keep_declaration_order() {
    let grammar: GrammarNode =
        choice(vec![literal("right").into(), literal("right also").into()]).into();

    assert_completions(grammar.completions("r").unwrap())
        .texts(&["right", "right also"])
        .completion(0, |c| {
            c.words(&[("r", true), ("ight", false)]);
        })
        .completion(1, |c| {
            c.words(&[("r", true), ("ight also", false)]);
        });
}

#[test]
fn test_no_matching_alternative_yields_nothing() {
    let grammar: GrammarNode =
        choice(vec![literal("wrong").into(), literal("wrong also").into()]).into();

    assert_completions(grammar.completions("r").unwrap()).empty();
}

#[test]
fn test_choice_without_alternatives_yields_nothing() {
    let grammar: GrammarNode = choice(Vec::new()).into();

    assert_completions(grammar.completions("").unwrap()).empty();
}

#[test]
fn test_adopts_the_matching_alternatives_value() {
    let grammar: GrammarNode = choice(vec![
        literal("right").value(json!("testValue")).into(),
        literal("wrong").into(),
    ])
    .into();

    assert_completions(grammar.completions("r").unwrap())
        .count(1)
        .completion(0, |c| {
            c.value(json!("testValue"));
        });
}

#[test]
fn test_own_value_overrides_the_alternatives() {
    let grammar: GrammarNode = choice(vec![
        literal("right").value(json!("testValue")).into(),
        literal("right also").value(json!("other")).into(),
    ])
    .value(json!("override"))
    .into();

    assert_completions(grammar.completions("r").unwrap())
        .count(2)
        .completion(0, |c| {
            c.value(json!("override"));
        })
        .completion(1, |c| {
            c.value(json!("override"));
        });
}

#[test]
fn test_alternative_with_no_value_reports_none() {
    let grammar: GrammarNode = choice(vec![literal("right").into()]).into();

    assert_completions(grammar.completions("r").unwrap())
        .count(1)
        .completion(0, |c| {
            c.no_value();
        });
}

#[test]
fn test_alternatives_id_nests_the_adopted_value() {
    let grammar: GrammarNode = choice(vec![literal("right")
        .value(json!("testValue"))
        .id("key")
        .into()])
    .into();

    assert_completions(grammar.completions("r").unwrap())
        .count(1)
        .completion(0, |c| {
            c.value(json!({"key": "testValue"}));
        });
}

#[test]
fn test_own_id_nests_outside_the_alternatives_id() {
    let grammar: GrammarNode = choice(vec![literal("right")
        .value(json!("testValue"))
        .id("inner")
        .into()])
    .id("outer")
    .into();

    assert_completions(grammar.completions("r").unwrap())
        .count(1)
        .completion(0, |c| {
            c.value(json!({"outer": {"inner": "testValue"}}));
        });
}

#[test]
fn test_alternatives_can_be_whole_subtrees() {
    let grammar: GrammarNode = choice(vec![
        sequence(vec![literal("right ").into(), literal("away").into()]).into(),
        literal("right round").into(),
    ])
    .into();

    assert_completions(grammar.completions("right ").unwrap())
        .texts(&["right away", "right round"]);
}
