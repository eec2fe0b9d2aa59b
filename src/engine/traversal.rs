//! Top level traversal
//!
//! `traverse` dispatches a node to its evaluator and then applies the node's
//! own value and id to every candidate that comes back. `complete` wraps the
//! root traversal in the external contract: validate the tree, then hand out
//! a lazy stream that realizes only candidates whose remaining input is
//! empty. Realization is also the single point where delivery marks fire,
//! which is what makes limited choices anywhere in the tree count
//! alternatives by what actually reached the consumer.

use serde_json::Value;

use crate::completion::Completion;
use crate::grammar::value::wrap_in_id;
use crate::grammar::{GrammarError, GrammarNode};

use super::candidate::Candidate;
use super::choice::ChoiceTraversal;
use super::literal::match_literal;
use super::sequence::traverse_sequence;

/// Evaluates one node against the remaining input, lazily.
pub(crate) fn traverse<'a>(
    node: &'a GrammarNode,
    input: &'a str,
) -> Box<dyn Iterator<Item = Candidate<'a>> + 'a> {
    let raw: Box<dyn Iterator<Item = Candidate<'a>> + 'a> = match node {
        GrammarNode::Literal(literal) => Box::new(match_literal(literal, input).into_iter()),
        GrammarNode::Sequence(sequence) => traverse_sequence(&sequence.children, input),
        GrammarNode::Choice(choice) => Box::new(ChoiceTraversal::new(choice, input)),
    };

    let value = node.value();
    let id = node.id();
    if value.is_none() && id.is_none() {
        return raw;
    }
    Box::new(raw.map(move |candidate| finish(candidate, value, id)))
}

/// Applies a node's declared value and id to one of its candidates.
///
/// An explicit value replaces whatever the node's evaluation produced, and
/// an id then nests the result under its key. A nested choice or literal
/// has already done its own finishing by the time its candidate passes
/// through here, so ids compose outward.
fn finish<'a>(
    mut candidate: Candidate<'a>,
    value: Option<&Value>,
    id: Option<&str>,
) -> Candidate<'a> {
    if let Some(value) = value {
        candidate.value = Some(value.clone());
    }
    if let Some(id) = id {
        candidate.value = wrap_in_id(id, candidate.value.take());
    }
    candidate
}

/// Evaluates a grammar against a partial input.
///
/// Validates the tree first, then returns the lazy completion stream. The
/// stream is demand driven: nothing below the root is evaluated until the
/// next completion is asked for, and a consumer that stops pulling stops
/// all further work.
pub fn complete<'a>(
    root: &'a GrammarNode,
    input: &'a str,
) -> Result<Completions<'a>, GrammarError> {
    root.validate()?;
    Ok(Completions {
        candidates: traverse(root, input),
    })
}

/// Lazy stream of completions for one evaluation
///
/// Yields only interpretations that consumed the entire input; candidates
/// with unconsumed input left over are discarded here, at the single point
/// with the authority to tell the two apart.
pub struct Completions<'a> {
    candidates: Box<dyn Iterator<Item = Candidate<'a>> + 'a>,
}

impl Iterator for Completions<'_> {
    type Item = Completion;

    fn next(&mut self) -> Option<Completion> {
        loop {
            let candidate = self.candidates.next()?;
            if !candidate.is_complete() {
                continue;
            }
            candidate.deliver();
            return Some(Completion {
                words: candidate.words,
                value: candidate.value,
            });
        }
    }
}
