//! Recursive-descent parser for the expression language.
//!
//! There is no lexer: [`parse_item`] classifies the character at the cursor
//! and hands off to one of the six sub-parsers in [`kinds`]. Sub-parsers
//! whose grammars overlap (identifier/number, procedure/lambda) return
//! [`Attempt::Declined`] instead of an error when they turn out not to
//! apply, and the dispatcher retries the alternative at the same position.
//! A parse is a pure function of the source and start offset: no state
//! survives between calls.

pub mod error;

mod classify;
mod cursor;
mod kinds;

use crate::ast::Item;
use cursor::Cursor;
pub use error::{Context, ParseError, ParseErrorKind};

/// Items nested deeper than this fail with `too deeply nested` instead of
/// exhausting the thread stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A successfully parsed item and the number of characters it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub item: Item,
    pub consumed: usize,
}

/// Outcome of a sub-parser attempt.
///
/// `Declined` means "this grammar rule does not apply at this position"; the
/// cursor is restored and the dispatcher tries the next candidate. It is an
/// internal control signal, never a user-visible failure — only when every
/// alternative has declined does the dispatcher report an error.
#[derive(Debug)]
pub(crate) enum Attempt<T> {
    Parsed(T),
    Declined,
}

/// Parses one item from the start of `source`.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    parse_at(source, 0)
}

/// Parses one item starting at character `offset`.
pub fn parse_at(source: &str, offset: usize) -> Result<Parsed, ParseError> {
    let chars: Vec<char> = source.chars().collect();
    let mut cur = Cursor::new(&chars, offset);
    let item = parse_item(&mut cur, 0)?;
    Ok(Parsed {
        item,
        consumed: cur.pos() - offset,
    })
}

/// Classifies the character at the cursor and dispatches to a sub-parser.
pub(crate) fn parse_item(cur: &mut Cursor<'_>, depth: usize) -> Result<Item, ParseError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::new(
            Context::Item,
            ParseErrorKind::TooDeeplyNested,
            cur.pos(),
        ));
    }
    match cur.peek() {
        Some(c) if classify::is_opener(c) => match kinds::procedure(cur, depth)? {
            Attempt::Parsed(item) => Ok(item),
            Attempt::Declined => kinds::lambda(cur, depth),
        },
        Some('"') => kinds::string_literal(cur),
        Some(c) if classify::is_number_opener(c) => match kinds::numeric_literal(cur)? {
            Attempt::Parsed(item) => Ok(item),
            Attempt::Declined => match kinds::identifier(cur, false)? {
                Attempt::Parsed(ident) => Ok(Item::Identifier(ident)),
                Attempt::Declined => Err(invalid_item(cur.pos())),
            },
        },
        Some('#') => kinds::boolean_literal(cur),
        Some(_) => match kinds::identifier(cur, false)? {
            Attempt::Parsed(ident) => Ok(Item::Identifier(ident)),
            Attempt::Declined => match kinds::numeric_literal(cur)? {
                Attempt::Parsed(item) => Ok(item),
                Attempt::Declined => Err(invalid_item(cur.pos())),
            },
        },
        None => Err(invalid_item(cur.pos())),
    }
}

fn invalid_item(offset: usize) -> ParseError {
    ParseError::new(Context::Item, ParseErrorKind::InvalidItem, offset)
}
