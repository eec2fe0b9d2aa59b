//! Fluent assertion API for completion streams
//!
//! Test support for checking an evaluation's output in one readable chain:
//!
//! ```text
//! assert_completions(grammar.completions("r")?)
//!     .count(2)
//!     .completion(0, |c| {
//!         c.text("right").words(&[("r", true), ("ight", false)]);
//!     });
//! ```
//!
//! Every check panics with the completion's position in the stream so a
//! failure in a multi-completion assertion points at the right entry.

use serde_json::Value;

use crate::completion::Completion;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder over a completion stream
///
/// Collects the stream up front so counts and per-entry checks can be
/// chained in any order.
pub fn assert_completions<I>(completions: I) -> CompletionsAssertion
where
    I: IntoIterator<Item = Completion>,
{
    CompletionsAssertion {
        completions: completions.into_iter().collect(),
    }
}

// ============================================================================
// Stream Assertions
// ============================================================================

pub struct CompletionsAssertion {
    completions: Vec<Completion>,
}

impl CompletionsAssertion {
    /// Assert how many completions the stream produced
    pub fn count(self, expected: usize) -> Self {
        if self.completions.len() != expected {
            let texts: Vec<String> = self
                .completions
                .iter()
                .map(|completion| completion.text())
                .collect();
            panic!(
                "Expected {} completions, found {}: {:?}",
                expected,
                self.completions.len(),
                texts
            );
        }
        self
    }

    /// Assert the stream produced nothing
    pub fn empty(self) -> Self {
        self.count(0)
    }

    /// Assert the full texts of all completions, in order
    pub fn texts(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self
            .completions
            .iter()
            .map(|completion| completion.text())
            .collect();
        if actual != expected {
            panic!("Expected completion texts {:?}, found {:?}", expected, actual);
        }
        self
    }

    /// Run checks against one completion by its position in the stream
    pub fn completion(self, index: usize, check: impl FnOnce(CompletionAssertion<'_>)) -> Self {
        match self.completions.get(index) {
            Some(completion) => check(CompletionAssertion { completion, index }),
            None => panic!(
                "Completion {}: not present, stream has {} completions",
                index,
                self.completions.len()
            ),
        }
        self
    }
}

// ============================================================================
// Single Completion Assertions
// ============================================================================

pub struct CompletionAssertion<'a> {
    completion: &'a Completion,
    index: usize,
}

impl CompletionAssertion<'_> {
    /// Assert the full completed text
    pub fn text(self, expected: &str) -> Self {
        let actual = self.completion.text();
        if actual != expected {
            panic!(
                "Completion {}: expected text {:?}, found {:?}",
                self.index, expected, actual
            );
        }
        self
    }

    /// Assert the part of the text the user already typed
    pub fn typed(self, expected: &str) -> Self {
        let actual = self.completion.typed_text();
        if actual != expected {
            panic!(
                "Completion {}: expected typed text {:?}, found {:?}",
                self.index, expected, actual
            );
        }
        self
    }

    /// Assert the suggested continuation
    pub fn suggested(self, expected: &str) -> Self {
        let actual = self.completion.suggested_text();
        if actual != expected {
            panic!(
                "Completion {}: expected suggested text {:?}, found {:?}",
                self.index, expected, actual
            );
        }
        self
    }

    /// Assert every word as a (text, typed) pair, in order
    pub fn words(self, expected: &[(&str, bool)]) -> Self {
        let actual: Vec<(&str, bool)> = self
            .completion
            .words
            .iter()
            .map(|word| (word.text.as_str(), word.input))
            .collect();
        if actual != expected {
            panic!(
                "Completion {}: expected words {:?}, found {:?}",
                self.index, expected, actual
            );
        }
        self
    }

    /// Assert the reported value
    pub fn value(self, expected: Value) -> Self {
        if self.completion.value.as_ref() != Some(&expected) {
            panic!(
                "Completion {}: expected value {}, found {:?}",
                self.index, expected, self.completion.value
            );
        }
        self
    }

    /// Assert no value was reported
    pub fn no_value(self) -> Self {
        if let Some(value) = &self.completion.value {
            panic!("Completion {}: expected no value, found {}", self.index, value);
        }
        self
    }
}
