//! Evaluation engine
//!
//! Walks a grammar tree against a partial input and produces the lazy
//! stream of completions. Evaluation is pure and demand driven: the tree is
//! never mutated, the same tree and input always produce the same stream in
//! the same order, and work happens only when the consumer pulls.
//!
//! Internally each node kind has its own evaluator over a shared candidate
//! representation; `traversal` ties them together and owns the external
//! entry point.

mod candidate;
mod choice;
mod literal;
mod sequence;
mod traversal;

pub use traversal::{complete, Completions};
