//! Choice evaluation
//!
//! Alternatives are evaluated against the same remaining input, one at a
//! time, in declaration order. The combined stream flattens each
//! alternative's candidates in that order.
//!
//! The limit policy counts alternatives, not candidates: an alternative uses
//! up a slot only once something derived from it is actually delivered as a
//! completion, and all further alternatives stop being evaluated once the
//! configured number of slots is used. Whether a candidate "made it" is only
//! known after the surrounding grammar has finished with it, possibly far
//! above this node, so the bookkeeping rides on the candidates themselves:
//! every candidate from a limited alternative carries a shared mark, the
//! root sets the mark when it realizes a completion, and the choice reads
//! the mark once the alternative's stream is exhausted. Demand driven
//! evaluation guarantees the ordering this depends on: by the time the
//! choice is asked for the candidate after an alternative's last one, every
//! earlier candidate has either been realized or discarded.

use crate::grammar::Choice;

use super::candidate::{Candidate, DeliveryMark};
use super::traversal::traverse;

/// Lazy scan over a choice's alternatives
pub(crate) struct ChoiceTraversal<'a> {
    choice: &'a Choice,
    input: &'a str,
    /// Index of the next alternative to open
    next_child: usize,
    /// Alternatives that have delivered at least one completion
    delivered: usize,
    current: Option<ChildStream<'a>>,
}

struct ChildStream<'a> {
    candidates: Box<dyn Iterator<Item = Candidate<'a>> + 'a>,
    /// Present only when the choice is limited
    mark: Option<DeliveryMark>,
}

impl<'a> ChoiceTraversal<'a> {
    pub(crate) fn new(choice: &'a Choice, input: &'a str) -> Self {
        ChoiceTraversal {
            choice,
            input,
            next_child: 0,
            delivered: 0,
            current: None,
        }
    }

    fn limit_reached(&self) -> bool {
        match self.choice.limit {
            Some(limit) => self.delivered >= limit,
            None => false,
        }
    }

    /// Opens the next alternative's stream, unless the limit is reached or
    /// none are left. Alternatives past the stopping point are never
    /// evaluated at all.
    fn open_next_child(&mut self) -> bool {
        if self.limit_reached() {
            return false;
        }
        let child = match self.choice.children.get(self.next_child) {
            Some(child) => child,
            None => return false,
        };
        self.next_child += 1;
        self.current = Some(ChildStream {
            candidates: traverse(child, self.input),
            mark: self.choice.limit.map(|_| DeliveryMark::new()),
        });
        true
    }
}

impl<'a> Iterator for ChoiceTraversal<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Candidate<'a>> {
        loop {
            match self.current.as_mut() {
                Some(stream) => match stream.candidates.next() {
                    Some(mut candidate) => {
                        if let Some(mark) = &stream.mark {
                            candidate.marks.push(mark.clone());
                        }
                        return Some(candidate);
                    }
                    None => {
                        // The alternative is spent; everything it produced
                        // has been adjudicated by now, so its mark is
                        // authoritative.
                        let counted = stream.mark.as_ref().is_some_and(DeliveryMark::is_set);
                        if counted {
                            self.delivered += 1;
                        }
                        self.current = None;
                    }
                },
                None => {
                    if !self.open_next_child() {
                        return None;
                    }
                }
            }
        }
    }
}
