//! Parser for column sort and grouping annotations.
//!
//! Annotations describe how the rows of a table are ordered. Two forms exist:
//!
//! - **Sort level**: a flat list of fields, each optionally followed by
//!   `asc` or `desc`: `LastName, FirstName desc`
//! - **Grouping levels**: parenthesized groups of such fields, outermost
//!   grouping first: `(Region), (LastName, FirstName desc)`
//!
//! Field names start with a letter or underscore and continue with letters,
//! digits, or underscores. Keywords are case-insensitive and field names may
//! not repeat (ignoring case). Blank text is a valid annotation with no fields.
//!
//! # Example
//!
//! ```
//! use colspec::dsl;
//! use colspec::model::ColumnSort;
//!
//! let level = dsl::parse_sort_level("LastName, FirstName desc").unwrap();
//! assert_eq!(
//!     level,
//!     vec![ColumnSort::ascending("LastName"), ColumnSort::descending("FirstName")]
//! );
//!
//! let err = dsl::parse_grouping_levels("A").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected '(' or end of input at start of input, but found identifier 'A'."
//! );
//! ```

pub mod context;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use error::{ParseError, ParseResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use span::{Span, Spanned};

use tracing::debug;

use crate::model::{GroupingLevels, SortLevel};

/// Parse a sort level annotation such as `A, B desc`.
///
/// `None`, empty, and whitespace-only text yield an empty sort level.
pub fn parse_sort_level<'src>(text: impl Into<Option<&'src str>>) -> ParseResult<SortLevel> {
    let text = text.into();
    let result = parser::sort_level(Lexer::new(text));
    match &result {
        Ok(level) => debug!(fields = level.len(), "parsed sort level"),
        Err(err) => debug!(error = %err, span = ?err.span(), "invalid sort level"),
    }
    result
}

/// Parse a grouping levels annotation such as `(A, B desc), (C)`.
///
/// `None`, empty, and whitespace-only text yield no grouping levels.
pub fn parse_grouping_levels<'src>(
    text: impl Into<Option<&'src str>>,
) -> ParseResult<GroupingLevels> {
    let text = text.into();
    let result = parser::grouping_levels(Lexer::new(text));
    match &result {
        Ok(levels) => debug!(groups = levels.len(), "parsed grouping levels"),
        Err(err) => debug!(error = %err, span = ?err.span(), "invalid grouping levels"),
    }
    result
}
