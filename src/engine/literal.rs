//! Literal matching
//!
//! A literal produces at most one candidate. Whichever of the node text and
//! the remaining input is shorter must be a prefix of the other; anything
//! else rejects. Matching compares whole string prefixes, so multi-byte
//! characters never split.

use crate::completion::Word;
use crate::grammar::Literal;

use super::candidate::Candidate;

/// Matches a literal against the front of the remaining input.
///
/// Three outcomes:
/// - the input covers the whole text: one typed word, leftover input stays
///   unconsumed for the next sibling
/// - the input runs out inside the text: a typed word for the covered part
///   (omitted when the input was empty) and a suggested word for the rest
/// - the input diverges from the text: no candidate
pub(crate) fn match_literal<'a>(literal: &'a Literal, input: &'a str) -> Option<Candidate<'a>> {
    let text = literal.text.as_str();
    let mut words = Vec::new();

    let remaining = if let Some(rest) = input.strip_prefix(text) {
        if !text.is_empty() {
            words.push(Word::typed(text));
        }
        rest
    } else if let Some(suggestion) = text.strip_prefix(input) {
        if !input.is_empty() {
            words.push(Word::typed(input));
        }
        words.push(Word::suggested(suggestion));
        ""
    } else {
        return None;
    };

    Some(Candidate {
        words,
        value: None,
        remaining,
        marks: Vec::new(),
    })
}
