//! Sequence composition
//!
//! Children are evaluated in order over one thread of input: each child sees
//! whatever the previous child left unconsumed. The combined stream is the
//! cross product of the children's streams, enumerated outer to inner so
//! everything derived from the first child's first candidate comes before
//! anything derived from its second. Branches where a later child cannot
//! match are discarded before they ever surface, which is what lets a
//! limited choice earlier in the sequence find out that an alternative
//! went nowhere.

use crate::grammar::GrammarNode;

use super::candidate::Candidate;
use super::traversal::traverse;

/// Evaluates a run of siblings against the remaining input, lazily.
///
/// An empty run yields exactly one candidate that consumes nothing, the
/// base case the recursion bottoms out on.
pub(crate) fn traverse_sequence<'a>(
    children: &'a [GrammarNode],
    input: &'a str,
) -> Box<dyn Iterator<Item = Candidate<'a>> + 'a> {
    match children.split_first() {
        None => Box::new(std::iter::once(Candidate::empty(input))),
        Some((first, rest)) => Box::new(traverse(first, input).flat_map(move |head| {
            traverse_sequence(rest, head.remaining).map(move |tail| head.clone().join(tail))
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{literal, GrammarNode};

    fn nodes(texts: &[&str]) -> Vec<GrammarNode> {
        texts.iter().map(|text| literal(*text).into()).collect()
    }

    #[test]
    fn test_empty_run_yields_one_untouched_candidate() {
        let children = Vec::new();
        let candidates: Vec<_> = traverse_sequence(&children, "leftover").collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].remaining, "leftover");
        assert!(candidates[0].words.is_empty());
    }

    #[test]
    fn test_children_thread_the_remaining_input() {
        let children = nodes(&["right", "also"]);
        let candidates: Vec<_> = traverse_sequence(&children, "rightal").collect();
        assert_eq!(candidates.len(), 1);
        let texts: Vec<&str> = candidates[0]
            .words
            .iter()
            .map(|word| word.text.as_str())
            .collect();
        assert_eq!(texts, vec!["right", "al", "so"]);
        assert!(candidates[0].is_complete());
    }

    #[test]
    fn test_dead_later_child_discards_the_branch() {
        let children = nodes(&["right", "also"]);
        let candidates: Vec<_> = traverse_sequence(&children, "rightx").collect();
        assert!(candidates.is_empty());
    }
}
