//! Error types for grammar configuration
//!
//! Evaluation itself never fails: an input the grammar cannot account for
//! produces an empty completion stream, not an error. The only error class is
//! a misconfigured tree, reported before any completion is produced.

use std::fmt;

/// Errors raised by grammar validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A choice was configured with a limit of zero, which can never deliver
    ZeroLimit,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::ZeroLimit => {
                write!(f, "Choice limit must be at least 1 (a limit of 0 can never deliver)")
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// Type alias for results of grammar construction and validation
pub type GrammarResult<T> = Result<T, GrammarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_display() {
        let message = GrammarError::ZeroLimit.to_string();
        assert!(message.contains("at least 1"));
    }
}
