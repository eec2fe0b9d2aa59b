//! Grammar nodes
//!
//! `GrammarNode` is the common wrapper for the three node kinds a grammar
//! tree is built from. It lets the evaluation engine operate uniformly on
//! mixed structures while each kind keeps its own configuration:
//!
//! - `Literal` matches a fixed text against the front of the input
//! - `Sequence` chains children, each consuming what the previous one left
//! - `Choice` offers alternatives evaluated against the same input, with an
//!   optional cap on how many alternatives may deliver results
//!
//! Every kind can declare a `value` (the structured data a match reports) and
//! an `id` (the key the value nests under when composed with siblings).
//! Children are owned by their parent, so a tree is acyclic by construction
//! and can be shared read-only across any number of evaluations.

use serde_json::Value;
use std::iter;

use super::error::{GrammarError, GrammarResult};
use crate::engine::{complete, Completions};

/// GrammarNode represents any node that can appear in a grammar tree
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarNode {
    Literal(Literal),
    Sequence(Sequence),
    Choice(Choice),
}

impl GrammarNode {
    pub fn is_literal(&self) -> bool {
        matches!(self, GrammarNode::Literal(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, GrammarNode::Sequence(_))
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, GrammarNode::Choice(_))
    }

    /// The node's declared value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            GrammarNode::Literal(literal) => literal.value.as_ref(),
            GrammarNode::Sequence(sequence) => sequence.value.as_ref(),
            GrammarNode::Choice(choice) => choice.value.as_ref(),
        }
    }

    /// The key the node's value nests under, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            GrammarNode::Literal(literal) => literal.id.as_deref(),
            GrammarNode::Sequence(sequence) => sequence.id.as_deref(),
            GrammarNode::Choice(choice) => choice.id.as_deref(),
        }
    }

    /// Direct children, empty for literals
    pub fn children(&self) -> &[GrammarNode] {
        match self {
            GrammarNode::Literal(_) => &[],
            GrammarNode::Sequence(sequence) => &sequence.children,
            GrammarNode::Choice(choice) => &choice.children,
        }
    }

    /// Walks all nodes below this one, depth first
    pub fn descendants(&self) -> Box<dyn Iterator<Item = &GrammarNode> + '_> {
        Box::new(
            self.children()
                .iter()
                .flat_map(|child| iter::once(child).chain(child.descendants())),
        )
    }

    /// Checks the whole tree for configuration that can never work
    ///
    /// Currently the only rejected configuration is a choice limit of zero.
    /// Evaluation entry points run this before producing completions, so a
    /// misconfigured tree fails fast instead of silently completing nothing.
    pub fn validate(&self) -> GrammarResult<()> {
        for node in iter::once(self).chain(self.descendants()) {
            if let GrammarNode::Choice(choice) = node {
                if choice.limit == Some(0) {
                    return Err(GrammarError::ZeroLimit);
                }
            }
        }
        Ok(())
    }

    /// Evaluates this tree against a partial input
    ///
    /// Returns the lazy completion stream, or the configuration error found
    /// by [`validate`](GrammarNode::validate).
    pub fn completions<'a>(&'a self, input: &'a str) -> GrammarResult<Completions<'a>> {
        complete(self, input)
    }
}

impl From<Literal> for GrammarNode {
    fn from(literal: Literal) -> Self {
        GrammarNode::Literal(literal)
    }
}

impl From<Sequence> for GrammarNode {
    fn from(sequence: Sequence) -> Self {
        GrammarNode::Sequence(sequence)
    }
}

impl From<Choice> for GrammarNode {
    fn from(choice: Choice) -> Self {
        GrammarNode::Choice(choice)
    }
}

/// A fixed text matched against the front of the remaining input
///
/// Input shorter than the text matches as a prefix and the rest of the text
/// becomes a suggestion; input that diverges from the text rejects.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub text: String,
    pub value: Option<Value>,
    pub id: Option<String>,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: None,
            id: None,
        }
    }

    /// Attaches the value a match reports
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Nests the reported value under a key
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Children matched in order over one thread of input
///
/// Each child consumes what the previous one left over. A candidate from an
/// earlier child survives only if every later child can still match, so a
/// dead end late in the sequence discards the whole branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub children: Vec<GrammarNode>,
    pub value: Option<Value>,
    pub id: Option<String>,
}

impl Sequence {
    pub fn new(children: Vec<GrammarNode>) -> Self {
        Self {
            children,
            value: None,
            id: None,
        }
    }

    /// Overrides the merged value of the children
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Nests the reported value under a key
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Alternatives evaluated against the same input, in declaration order
///
/// An unlimited choice yields every alternative's completions, flattened in
/// declaration order. With a `limit` of n, alternatives are tried in order
/// until n of them have actually delivered a completion to the consumer, and
/// the rest are never evaluated. An alternative that matches locally but is
/// discarded by the surrounding grammar does not use up a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub children: Vec<GrammarNode>,
    pub value: Option<Value>,
    pub id: Option<String>,
    pub limit: Option<usize>,
}

impl Choice {
    pub fn new(children: Vec<GrammarNode>) -> Self {
        Self {
            children,
            value: None,
            id: None,
            limit: None,
        }
    }

    /// Overrides whatever value the matching alternative reported
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Nests the reported value under a key
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Caps how many alternatives may deliver results
    ///
    /// Must be at least 1; a limit of zero is rejected by validation.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
