//! Completion results
//!
//! `Completion` is the externally visible outcome of evaluating a grammar
//! against a partial input: one fully realized way the grammar accounts for
//! the input as the prefix of a longer accepted string. Its `words` split the
//! completed text into spans the user already typed and spans the grammar
//! suggests, and `value` carries whatever structured data the matched grammar
//! path declared.
//!
//! Examples:
//! - Input "r" against a literal "right" completes to the words
//!   ("r", typed) and ("ight", suggested)
//! - A matched literal with id "command" and value "git-status" completes
//!   with the value {"command": "git-status"}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A contiguous span of completed text, tagged by origin
///
/// `input` is true when the span was drawn from the user-supplied input and
/// false when it is a suggested continuation. Within one completion every
/// typed word precedes every suggested word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub input: bool,
}

impl Word {
    /// A span the user already typed
    pub fn typed(text: impl Into<String>) -> Self {
        Word {
            text: text.into(),
            input: true,
        }
    }

    /// A span the grammar suggests as continuation
    pub fn suggested(text: impl Into<String>) -> Self {
        Word {
            text: text.into(),
            input: false,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input {
            write!(f, "{}", self.text)
        } else {
            write!(f, "[{}]", self.text)
        }
    }
}

/// One fully realized interpretation of the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub words: Vec<Word>,
    pub value: Option<Value>,
}

impl Completion {
    /// The full completed text, typed and suggested spans joined in order
    pub fn text(&self) -> String {
        self.words.iter().map(|word| word.text.as_str()).collect()
    }

    /// Only the spans the user already typed
    ///
    /// For a completion produced at the root this reconstructs the input
    /// string exactly.
    pub fn typed_text(&self) -> String {
        self.words
            .iter()
            .filter(|word| word.input)
            .map(|word| word.text.as_str())
            .collect()
    }

    /// Only the suggested continuation spans
    pub fn suggested_text(&self) -> String {
        self.words
            .iter()
            .filter(|word| !word.input)
            .map(|word| word.text.as_str())
            .collect()
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
