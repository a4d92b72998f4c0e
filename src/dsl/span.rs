//! Source locations for annotation tokens.

use std::ops::Range;

/// A byte range in the annotation text.
pub type Span = Range<usize>;

/// A value paired with the span it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}
