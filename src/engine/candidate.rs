//! In-flight evaluation state
//!
//! A `Candidate` is one partially evaluated interpretation of the input:
//! the words produced so far, the value folded so far, and the suffix of the
//! input that is still unconsumed. Candidates flow through the evaluators
//! and only become visible [`Completion`](crate::completion::Completion)s
//! once the root finds their remaining input empty.

use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

use crate::completion::Word;
use crate::grammar::value::merge_values;

/// Shared flag tying a candidate back to the limited choice alternative
/// that produced it
///
/// The root sets the flag when a candidate carrying it is realized as a
/// completion. The choice reads it after the alternative's stream is
/// exhausted to decide whether the alternative used up a limit slot.
#[derive(Debug, Clone)]
pub(crate) struct DeliveryMark(Rc<Cell<bool>>);

impl DeliveryMark {
    pub(crate) fn new() -> Self {
        DeliveryMark(Rc::new(Cell::new(false)))
    }

    pub(crate) fn set(&self) {
        self.0.set(true);
    }

    pub(crate) fn is_set(&self) -> bool {
        self.0.get()
    }
}

/// One partially evaluated interpretation of the input
#[derive(Debug, Clone)]
pub(crate) struct Candidate<'a> {
    pub(crate) words: Vec<Word>,
    pub(crate) value: Option<Value>,
    pub(crate) remaining: &'a str,
    pub(crate) marks: Vec<DeliveryMark>,
}

impl<'a> Candidate<'a> {
    /// A candidate that has produced nothing and consumed nothing
    pub(crate) fn empty(remaining: &'a str) -> Self {
        Candidate {
            words: Vec::new(),
            value: None,
            remaining,
            marks: Vec::new(),
        }
    }

    /// Appends a sibling's contribution matched against this candidate's
    /// leftover input
    pub(crate) fn join(mut self, tail: Candidate<'a>) -> Candidate<'a> {
        self.words.extend(tail.words);
        self.value = merge_values(self.value.take(), tail.value);
        self.remaining = tail.remaining;
        self.marks.extend(tail.marks);
        self
    }

    /// True once the whole input has been consumed
    pub(crate) fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Flags every limited choice alternative on this candidate's path as
    /// having delivered
    pub(crate) fn deliver(&self) {
        for mark in &self.marks {
            mark.set();
        }
    }
}
