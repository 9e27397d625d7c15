use crate::ast::Item;
use crate::parsing::classify;
use crate::parsing::cursor::Cursor;
use crate::parsing::error::{Context, ParseError, ParseErrorKind};
use crate::parsing::{Attempt, parse_item};

use super::procedure::reads_as_identifier;
use super::{LAMBDA_KEYWORDS, identifier};

/// Parses an anonymous-function form
/// `opener ws* keyword ws* argOpener ws* (param ws*)* argCloser ws* body ws* closer`
/// at the cursor.
///
/// Reached only after the procedure parser declined on the lambda keyword.
/// The keyword is scanned in opener mode so `lambda(x)` stops at the
/// bracket; every parameter must be a genuine identifier; exactly one body
/// item is required; and the outer closer must be the counterpart of the
/// outer opener. Never declines.
pub(crate) fn lambda(cur: &mut Cursor<'_>, depth: usize) -> Result<Item, ParseError> {
    let Some(closer) = cur.peek().and_then(classify::closer_for) else {
        return Err(ParseError::new(
            Context::Lambda,
            ParseErrorKind::UnexpectedCharacter(cur.peek()),
            cur.pos(),
        ));
    };
    cur.bump();
    cur.skip_whitespace();

    match cur.peek() {
        Some(c) if reads_as_identifier(c) => {}
        c => {
            return Err(ParseError::new(
                Context::Lambda,
                ParseErrorKind::ExpectedIdentifier(c),
                cur.pos(),
            ));
        }
    }
    let keyword_at = cur.pos();
    let keyword = match identifier(cur, true)? {
        Attempt::Parsed(ident) => ident.name,
        Attempt::Declined => {
            return Err(ParseError::new(
                Context::Lambda,
                ParseErrorKind::ExpectedIdentifierFoundNumber,
                cur.pos(),
            ));
        }
    };
    if !LAMBDA_KEYWORDS.contains(&keyword.as_str()) {
        return Err(ParseError::new(
            Context::Lambda,
            ParseErrorKind::ExpectedLambda(keyword),
            keyword_at,
        ));
    }
    cur.skip_whitespace();

    // The parameter list may use any bracket pair, independent of the outer
    // form's pair.
    let Some(params_closer) = cur.peek().and_then(classify::closer_for) else {
        return Err(ParseError::new(
            Context::Lambda,
            ParseErrorKind::ExpectedArgumentsGroup(cur.peek()),
            cur.pos(),
        ));
    };
    cur.bump();
    cur.skip_whitespace();

    let mut params = Vec::new();
    loop {
        match cur.peek() {
            Some(c) if c == params_closer => {
                cur.bump();
                break;
            }
            None => {
                return Err(ParseError::new(
                    Context::Lambda,
                    ParseErrorKind::UnexpectedEnd,
                    cur.pos(),
                ));
            }
            _ => {}
        }
        match identifier(cur, false)? {
            Attempt::Parsed(ident) => params.push(ident),
            Attempt::Declined => {
                return Err(ParseError::new(
                    Context::Lambda,
                    ParseErrorKind::ExpectedIdentifierFoundNumber,
                    cur.pos(),
                ));
            }
        }
        cur.skip_whitespace();
    }
    cur.skip_whitespace();

    match cur.peek() {
        Some(c) if c == params_closer => {
            return Err(ParseError::new(
                Context::Lambda,
                ParseErrorKind::ExpectedBodyFoundClose,
                cur.pos(),
            ));
        }
        None => {
            return Err(ParseError::new(
                Context::Lambda,
                ParseErrorKind::UnexpectedEnd,
                cur.pos(),
            ));
        }
        _ => {}
    }
    let body = parse_item(cur, depth + 1)?;
    cur.skip_whitespace();

    match cur.peek() {
        Some(c) if c == closer => {
            cur.bump();
        }
        c => {
            return Err(ParseError::new(
                Context::Lambda,
                ParseErrorKind::ExpectedClose(c),
                cur.pos(),
            ));
        }
    }
    Ok(Item::Lambda {
        params,
        body: Box::new(body),
    })
}
