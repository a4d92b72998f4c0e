//! Errors produced while parsing column annotations.
//!
//! The rendered message of each variant is what callers show to users, so the
//! wording is fixed. Spans are carried alongside for tooling.

use thiserror::Error;

use super::lexer::TokenKind;
use super::span::Span;

/// Result type for annotation parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// The first problem found in an annotation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("Unrecognized character '{character}'.")]
    UnrecognizedCharacter { character: char, span: Span },

    /// A token that the grammar does not allow at this point.
    #[error("Expected {} {context}, but found {found}.", humanize_or(.expected))]
    UnexpectedToken {
        /// The kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// Where the token appeared: `at start of input` or `after <token>`.
        context: String,
        /// Description of the token that was found.
        found: String,
        span: Span,
    },

    /// A field named twice, compared case-insensitively.
    #[error("The field name '{name}' appears more than once.")]
    DuplicateField {
        /// Spelling of the second occurrence.
        name: String,
        span: Span,
    },
}

impl ParseError {
    /// The user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Location of the offending token in the annotation text.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnrecognizedCharacter { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::DuplicateField { span, .. } => span.clone(),
        }
    }
}

/// Join token kind descriptions as an English list ending in "or".
///
/// `A`, `A or B`, `A, B, or C`.
pub(crate) fn humanize_or(kinds: &[TokenKind]) -> String {
    let items: Vec<&str> = kinds.iter().map(|k| k.describe()).collect();
    match items.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}
