//! # typeahead
//!
//! A grammar-driven completion engine for interactive input.
//!
//! A grammar is a tree of three node kinds: literals that match fixed text,
//! sequences that chain children over one thread of input, and choices that
//! offer alternatives. Evaluating the tree against a partial input yields a
//! lazy, deterministic stream of completions; each completion splits its text
//! into the spans the user already typed and the spans the grammar suggests,
//! and carries a structured value assembled from the matched path.
//!
//! Matching never fails with an error. Input the grammar cannot account for
//! simply produces an empty stream, and the only error surface is a
//! misconfigured tree, reported before evaluation starts.
//!
//! Choices can cap how many of their alternatives may contribute through
//! `limit`. The cap counts alternatives that actually delivered a completion
//! to the consumer, not alternatives that merely matched locally, so an
//! alternative discarded further up the tree does not use up a slot. See the
//! [engine] module for how that bookkeeping works.
//!
//! For test assertion helpers, see the [testing] module.

pub mod completion;
pub mod engine;
pub mod grammar;
pub mod testing;

pub use completion::{Completion, Word};
pub use engine::{complete, Completions};
pub use grammar::{choice, literal, optional, sequence};
pub use grammar::{Choice, GrammarError, GrammarNode, GrammarResult, Literal, Sequence};
