//! Grammar model
//!
//! The node types a grammar tree is built from, the builder functions that
//! construct them, validation of tree configuration, and the folding rules
//! for the values matched nodes report.

pub mod build;
pub mod error;
pub mod node;
pub(crate) mod value;

pub use build::{choice, literal, optional, sequence};
pub use error::{GrammarError, GrammarResult};
pub use node::{Choice, GrammarNode, Literal, Sequence};
