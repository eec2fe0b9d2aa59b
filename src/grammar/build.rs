//! Builder functions for grammar trees
//!
//! Thin constructors over the node types, ergonomic enough that a whole
//! grammar reads as one expression:
//!
//! ```text
//! sequence(vec![
//!     literal("git ").into(),
//!     choice(vec![
//!         literal("status").value("git-status").into(),
//!         literal("stash").value("git-stash").into(),
//!     ])
//!     .id("command")
//!     .into(),
//! ])
//! ```
//!
//! Builders never validate; misconfiguration is caught when the tree is
//! first evaluated, or by calling [`GrammarNode::validate`] explicitly.

use super::node::{Choice, GrammarNode, Literal, Sequence};

/// A literal matching the given text
pub fn literal(text: impl Into<String>) -> Literal {
    Literal::new(text)
}

/// A sequence over the given children, matched in order
pub fn sequence(children: Vec<GrammarNode>) -> Sequence {
    Sequence::new(children)
}

/// A choice over the given alternatives, tried in order
pub fn choice(children: Vec<GrammarNode>) -> Choice {
    Choice::new(children)
}

/// A node that may be skipped
///
/// Sugar for a choice between matching nothing and matching the given node,
/// in that order, so the skipping interpretation always comes first in the
/// completion stream.
pub fn optional(node: impl Into<GrammarNode>) -> Choice {
    Choice::new(vec![Sequence::new(Vec::new()).into(), node.into()])
}
