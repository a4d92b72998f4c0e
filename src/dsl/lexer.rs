//! Lexer for column annotations.
//!
//! Tokens are produced on demand: the parser pulls one token at a time with
//! [`Lexer::next_token`], so nothing past the current character is buffered.
//! Once the input is exhausted the lexer keeps returning
//! [`Token::EndOfInput`].

use unicode_general_category::{get_general_category, GeneralCategory};

use super::span::{Span, Spanned};

/// A token in a column annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// The end of the text, represented as a token so the grammar can expect it.
    EndOfInput,
    /// A character the lexer does not recognize.
    ///
    /// This is a lexing error, not a parsing error.
    Error(char),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `asc` in any casing.
    AscKeyword,
    /// `desc` in any casing.
    DescKeyword,
    /// A field name, spelled as it appears in the text.
    Identifier(&'src str),
}

/// The kind of a token, without its payload.
///
/// Used by the parser to say which tokens it accepts at a given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    Error,
    OpenParen,
    CloseParen,
    Comma,
    AscKeyword,
    DescKeyword,
    Identifier,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of input",
            // Lexing errors are reported before any token is described.
            TokenKind::Error => "unrecognized character",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Comma => "comma",
            TokenKind::AscKeyword => "keyword 'asc'",
            TokenKind::DescKeyword => "keyword 'desc'",
            TokenKind::Identifier => "identifier",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

impl<'src> Token<'src> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::EndOfInput => TokenKind::EndOfInput,
            Token::Error(_) => TokenKind::Error,
            Token::OpenParen => TokenKind::OpenParen,
            Token::CloseParen => TokenKind::CloseParen,
            Token::Comma => TokenKind::Comma,
            Token::AscKeyword => TokenKind::AscKeyword,
            Token::DescKeyword => TokenKind::DescKeyword,
            Token::Identifier(_) => TokenKind::Identifier,
        }
    }

    /// Describe this particular token for a diagnostic.
    ///
    /// Identifiers include their spelling; every other token is described by
    /// its kind alone.
    pub fn describe(&self) -> String {
        match self {
            Token::Identifier(name) => format!("identifier '{}'", name),
            // Only kept for exhaustiveness, see `TokenKind::describe`.
            Token::Error(c) => format!("unrecognized character '{}'", c),
            other => other.kind().describe().to_string(),
        }
    }
}

/// Map a word to a direction keyword (any casing) or return it as an identifier.
fn keyword_or_ident(s: &str) -> Token<'_> {
    if s.eq_ignore_ascii_case("asc") {
        Token::AscKeyword
    } else if s.eq_ignore_ascii_case("desc") {
        Token::DescKeyword
    } else {
        Token::Identifier(s)
    }
}

/// Letters are the `L*` general categories. Letter numbers (`Ⅻ`), other
/// numbers (`²`) and combining marks are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

fn is_identifier_continue(c: char) -> bool {
    c == '_'
        || is_letter(c)
        || matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Pull-based tokenizer over an annotation string.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    /// Byte offset of the next character to read.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Create a lexer. Absent text is lexed as the empty string.
    pub fn new(source: impl Into<Option<&'src str>>) -> Self {
        Self {
            source: source.into().unwrap_or_default(),
            position: 0,
        }
    }

    /// The text being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.position += c.len_utf8();
    }

    /// Read the next token.
    ///
    /// A lexing error consumes exactly one character, so calling this again
    /// after an error continues with the character that follows.
    pub fn next_token(&mut self) -> Spanned<Token<'src>> {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }

        let start = self.position;
        let Some(c) = self.peek() else {
            return Spanned::new(Token::EndOfInput, start..start);
        };
        self.bump(c);

        let token = match c {
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            ',' => Token::Comma,
            c if is_identifier_start(c) => {
                while let Some(next) = self.peek() {
                    if !is_identifier_continue(next) {
                        break;
                    }
                    self.bump(next);
                }
                keyword_or_ident(&self.source[start..self.position])
            }
            other => Token::Error(other),
        };

        Spanned::new(token, self.span_from(start))
    }

    fn span_from(&self, start: usize) -> Span {
        start..self.position
    }
}

/// Yields every token before the end of input, including lexing errors.
impl<'src> Iterator for Lexer<'src> {
    type Item = Spanned<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        match token.value {
            Token::EndOfInput => None,
            _ => Some(token),
        }
    }
}

/// Lex a whole string into tokens (without the trailing end-of-input token).
pub fn lex(source: &str) -> Vec<Spanned<Token<'_>>> {
    Lexer::new(source).collect()
}
