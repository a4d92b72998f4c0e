//! Token cursor that explains what went wrong.
//!
//! [`LexingContext`] wraps a [`Lexer`] and remembers the token before the
//! current one, so that an unexpected token can be reported relative to what
//! preceded it ("after comma", "at start of input").

use tracing::trace;

use super::error::{ParseError, ParseResult};
use super::lexer::{Lexer, Token, TokenKind};
use super::span::{Span, Spanned};

pub struct LexingContext<'src> {
    lexer: Lexer<'src>,
    previous: Option<Spanned<Token<'src>>>,
    current: Option<Spanned<Token<'src>>>,
}

impl<'src> LexingContext<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        Self {
            lexer,
            previous: None,
            current: None,
        }
    }

    /// The most recently lexed token.
    ///
    /// Before the first call to [`expect`](Self::expect) this is
    /// [`Token::EndOfInput`]; the parsers always advance before reading it.
    pub fn current(&self) -> Token<'src> {
        self.current
            .as_ref()
            .map_or(Token::EndOfInput, |token| token.value)
    }

    /// Span of the current token.
    pub fn current_span(&self) -> Span {
        self.current
            .as_ref()
            .map_or(0..0, |token| token.span.clone())
    }

    /// The token before [`current`](Self::current), if any.
    pub fn previous(&self) -> Option<Token<'src>> {
        self.previous.as_ref().map(|token| token.value)
    }

    /// Advance to the next token and check that it is one of `expected`.
    ///
    /// A lexing error is reported as such regardless of `expected`.
    pub fn expect(&mut self, expected: &[TokenKind]) -> ParseResult<Token<'src>> {
        let next = self.lexer.next_token();
        self.previous = self.current.replace(next.clone());

        match next.value {
            Token::Error(character) => Err(ParseError::UnrecognizedCharacter {
                character,
                span: next.span,
            }),
            token if expected.contains(&token.kind()) => {
                trace!(
                    kind = %token.kind(),
                    span_start = next.span.start,
                    span_end = next.span.end,
                    "accepted token"
                );
                Ok(token)
            }
            token => Err(ParseError::UnexpectedToken {
                expected: expected.to_vec(),
                context: self.describe_context(),
                found: token.describe(),
                span: next.span,
            }),
        }
    }

    fn describe_context(&self) -> String {
        match &self.previous {
            None => "at start of input".to_string(),
            Some(previous) => format!("after {}", previous.value.describe()),
        }
    }
}
