//! Recursive-descent parser for column annotations.
//!
//! Two grammars share the same token cursor:
//!
//! ```text
//! sort_level      := ( field ( "," field )* )?
//! grouping_levels := ( group ( "," group )* )?
//! group           := "(" field ( "," field )* ")"
//! field           := identifier ( "asc" | "desc" )?
//! ```
//!
//! Parsing stops at the first error. Field names must be unique ignoring
//! case; for grouping levels the rule spans all groups, not just one.

use std::collections::HashSet;

use super::context::LexingContext;
use super::error::{ParseError, ParseResult};
use super::lexer::{Lexer, Token, TokenKind};
use super::span::Span;
use crate::model::{ColumnSort, GroupingLevels, SortLevel};

// ============================================================================
// Expected token sets
// ============================================================================

const SORT_LEVEL_START: &[TokenKind] = &[TokenKind::Identifier, TokenKind::EndOfInput];
const SORT_FIELD_FOLLOW: &[TokenKind] = &[
    TokenKind::AscKeyword,
    TokenKind::DescKeyword,
    TokenKind::Comma,
    TokenKind::EndOfInput,
];
const SORT_DIRECTION_FOLLOW: &[TokenKind] = &[TokenKind::Comma, TokenKind::EndOfInput];

const GROUPING_LEVELS_START: &[TokenKind] = &[TokenKind::OpenParen, TokenKind::EndOfInput];
const GROUP_FIELD_FOLLOW: &[TokenKind] = &[
    TokenKind::AscKeyword,
    TokenKind::DescKeyword,
    TokenKind::Comma,
    TokenKind::CloseParen,
];
const GROUP_DIRECTION_FOLLOW: &[TokenKind] = &[TokenKind::Comma, TokenKind::CloseParen];
const GROUP_FOLLOW: &[TokenKind] = &[TokenKind::Comma, TokenKind::EndOfInput];

const FIELD: &[TokenKind] = &[TokenKind::Identifier];
const GROUP_START: &[TokenKind] = &[TokenKind::OpenParen];

// ============================================================================
// Grammar rules
// ============================================================================

/// Parse a flat, comma-separated list of fields.
pub fn sort_level(lexer: Lexer<'_>) -> ParseResult<SortLevel> {
    let mut ctx = LexingContext::new(lexer);
    let mut names = FieldNames::default();
    let mut level = SortLevel::new();

    let mut token = ctx.expect(SORT_LEVEL_START)?;

    while let Token::Identifier(name) = token {
        let span = ctx.current_span();
        let (ascending, separator) = direction(&mut ctx, SORT_FIELD_FOLLOW, SORT_DIRECTION_FOLLOW)?;

        names.insert(name, span)?;
        level.push(ColumnSort::new(name, ascending));

        token = match separator {
            Token::Comma => ctx.expect(FIELD)?,
            other => other,
        };
    }

    Ok(level)
}

/// Parse a comma-separated list of parenthesized groups of fields.
pub fn grouping_levels(lexer: Lexer<'_>) -> ParseResult<GroupingLevels> {
    let mut ctx = LexingContext::new(lexer);
    let mut names = FieldNames::default();
    let mut levels = GroupingLevels::new();

    let mut token = ctx.expect(GROUPING_LEVELS_START)?;

    while token == Token::OpenParen {
        let mut group = SortLevel::new();
        let mut field = ctx.expect(FIELD)?;

        while let Token::Identifier(name) = field {
            let span = ctx.current_span();
            let (ascending, separator) =
                direction(&mut ctx, GROUP_FIELD_FOLLOW, GROUP_DIRECTION_FOLLOW)?;

            names.insert(name, span)?;
            group.push(ColumnSort::new(name, ascending));

            field = match separator {
                Token::Comma => ctx.expect(FIELD)?,
                other => other,
            };
        }

        // The inner loop only ends on ')'.
        levels.push(group);

        token = match ctx.expect(GROUP_FOLLOW)? {
            Token::Comma => ctx.expect(GROUP_START)?,
            other => other,
        };
    }

    Ok(levels)
}

/// Read the optional direction keyword after a field name.
///
/// Returns whether the field sorts ascending together with the separator
/// token that ended the field.
fn direction<'src>(
    ctx: &mut LexingContext<'src>,
    field_follow: &[TokenKind],
    direction_follow: &[TokenKind],
) -> ParseResult<(bool, Token<'src>)> {
    let ascending = match ctx.expect(field_follow)? {
        Token::AscKeyword => true,
        Token::DescKeyword => false,
        separator => return Ok((true, separator)),
    };

    Ok((ascending, ctx.expect(direction_follow)?))
}

/// Field names seen so far, compared ignoring case.
#[derive(Default)]
struct FieldNames {
    seen: HashSet<String>,
}

impl FieldNames {
    fn insert(&mut self, name: &str, span: Span) -> ParseResult<()> {
        if self.seen.insert(fold_case(name)) {
            Ok(())
        } else {
            Err(ParseError::DuplicateField {
                name: name.to_string(),
                span,
            })
        }
    }
}

/// Uppercase each character on its own, with no surrounding context.
///
/// Characters whose uppercase form is longer than one character (`ß`) are
/// kept as they are.
fn fold_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}
